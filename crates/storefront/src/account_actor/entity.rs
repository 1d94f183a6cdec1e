//! [`ActorEntity`] implementation for [`Account`].

use super::AccountError;
use crate::model::{Account, AccountCreate, AccountId, Page};
use record_actor::ActorEntity;
use std::collections::BTreeMap;

impl ActorEntity for Account {
    type Id = AccountId;
    type Create = AccountCreate;
    type Query = Page;
    type Error = AccountError;

    fn from_create_params(id: AccountId, params: AccountCreate) -> Result<Self, AccountError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(AccountError::EmptyName);
        }
        Ok(Self {
            id,
            name: name.to_string(),
        })
    }

    fn select(store: &BTreeMap<AccountId, Self>, page: &Page) -> Result<Vec<Self>, AccountError> {
        Ok(page.apply(store.values().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(names: &[&str]) -> BTreeMap<AccountId, Account> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let id = AccountId::new(format!("acct_{i}"));
                let account = Account::from_create_params(id.clone(), AccountCreate::new(*name)).unwrap();
                (id, account)
            })
            .collect()
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = Account::from_create_params("a".into(), AccountCreate::new("   "));
        assert_eq!(result, Err(AccountError::EmptyName));
    }

    #[test]
    fn name_is_trimmed() {
        let account = Account::from_create_params("a".into(), AccountCreate::new("  Ada ")).unwrap();
        assert_eq!(account.name, "Ada");
    }

    #[test]
    fn listing_is_paged_in_id_order() {
        let accounts = store(&["Ada", "Brian", "Chen", "Dana"]);
        let page = Account::select(&accounts, &Page::new(1, 2)).unwrap();
        let names: Vec<&str> = page.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Brian", "Chen"]);

        let everything = Account::select(&accounts, &Page::new(0, 0)).unwrap();
        assert_eq!(everything.len(), 4);
    }
}
