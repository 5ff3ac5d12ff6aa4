use crate::error::AppResult;
use crate::models::Admin;
use crate::store::{self, quote_formula_str, ListQuery, StoreClient};

pub struct AdminRepository;

impl AdminRepository {
    /// Look up a backoffice account by exact email. Returns None for an
    /// unknown email; the caller folds that into the same "invalid
    /// credentials" outcome as a wrong password.
    pub async fn find_by_email(store: &StoreClient, email: &str) -> AppResult<Option<Admin>> {
        let formula = format!("Email = {}", quote_formula_str(email));
        let records = store
            .list(store::ADMINS, &ListQuery::filtered(formula).with_max(1))
            .await?;

        Ok(records.into_iter().next().map(Admin::from))
    }
}
