use serde_json::{json, Map, Value};

use classfolio::services::AuthService;

use super::fake_store::FakeStore;

/// A seeded project's store-assigned identifiers
#[allow(dead_code)]
pub struct SeededProject {
    pub id: String,
    pub slug: String,
}

/// Factory for seeding records into the fake store
pub struct Factory<'a> {
    store: &'a FakeStore,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(store: &'a FakeStore) -> Self {
        Self { store }
    }

    /// Seed a backoffice account with an argon2-hashed password
    pub fn create_admin(&self, email: &str, password: &str) -> String {
        let hash = AuthService::hash_password(password).unwrap();
        let mut fields = Map::new();
        fields.insert("Email".to_string(), json!(email));
        fields.insert("Password".to_string(), json!(hash));
        self.store.insert("Admins", fields)
    }

    pub fn create_project(&self, name: &str, published: bool) -> SeededProject {
        self.create_project_with(name, published, |_| {})
    }

    /// Seed a project, letting the caller adjust fields before insertion
    pub fn create_project_with(
        &self,
        name: &str,
        published: bool,
        customize: impl FnOnce(&mut Map<String, Value>),
    ) -> SeededProject {
        let mut fields = Map::new();
        fields.insert("Name".to_string(), json!(name));
        fields.insert("Description".to_string(), json!(""));
        fields.insert("Published".to_string(), json!(published));
        customize(&mut fields);

        let id = self.store.insert("Projects", fields);
        let slug = self
            .store
            .record("Projects", &id)
            .unwrap()
            .fields
            .get("Slug")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        SeededProject { id, slug }
    }

    pub fn create_stack(&self, name: &str) -> String {
        let mut fields = Map::new();
        fields.insert("Name".to_string(), json!(name));
        self.store.insert("Stacks", fields)
    }

    pub fn create_student(&self, firstname: &str, lastname: &str) -> String {
        let mut fields = Map::new();
        fields.insert("Firstname".to_string(), json!(firstname));
        fields.insert("Lastname".to_string(), json!(lastname));
        fields.insert("Email".to_string(), json!(""));
        fields.insert("Class".to_string(), json!(""));
        self.store.insert("Students", fields)
    }

    /// Read a project field straight from the store, for assertions
    pub fn project_field(&self, id: &str, field: &str) -> Value {
        self.store
            .record("Projects", id)
            .unwrap()
            .fields
            .get(field)
            .cloned()
            .unwrap_or(Value::Null)
    }
}
