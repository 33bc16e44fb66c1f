use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// EntityKind enumerates the record types manageable through the uniform
// entity create/search/update/delete API.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Item,
    LoanCycle,
    LoanRule,
    LoanRuleMatch,
    Location,
    MailTemplate,
}

impl EntityKind {
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::User,
            EntityKind::Item,
            EntityKind::LoanCycle,
            EntityKind::LoanRule,
            EntityKind::LoanRuleMatch,
            EntityKind::Location,
            EntityKind::MailTemplate,
        ]
    }

    pub fn parse(s: &str) -> Option<EntityKind> {
        match s {
            "user" => Some(EntityKind::User),
            "item" => Some(EntityKind::Item),
            "loan_cycle" => Some(EntityKind::LoanCycle),
            "loan_rule" => Some(EntityKind::LoanRule),
            "loan_rule_match" => Some(EntityKind::LoanRuleMatch),
            "location" => Some(EntityKind::Location),
            "mail_template" => Some(EntityKind::MailTemplate),
            _ => None,
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
            EntityKind::Item => write!(f, "item"),
            EntityKind::LoanCycle => write!(f, "loan_cycle"),
            EntityKind::LoanRule => write!(f, "loan_rule"),
            EntityKind::LoanRuleMatch => write!(f, "loan_rule_match"),
            EntityKind::Location => write!(f, "location"),
            EntityKind::MailTemplate => write!(f, "mail_template"),
        }
    }
}
