// Worker entity as persisted by the store.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A worker that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorker {
    pub name: String,
    pub department: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Fields supplied by an update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerChanges {
    pub name: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl WorkerChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

impl Worker {
    pub fn apply(&mut self, changes: WorkerChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(department) = changes.department {
            self.department = department;
        }
        if changes.email.is_some() {
            self.email = changes.email;
        }
        if changes.phone.is_some() {
            self.phone = changes.phone;
        }
    }
}
