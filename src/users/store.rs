use crate::users::domain::model::UserRecord;

// UserStore holds the users selected into the circulation session. Item
// validation is re-triggered by the desk whenever this list changes.
#[derive(Debug)]
pub struct UserStore {
    records: Vec<UserRecord>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    pub fn extend(&mut self, users: Vec<UserRecord>) {
        self.records.extend(users);
    }

    pub fn remove(&mut self, index: usize) -> Option<UserRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }
}
