//! Account model -> entity mapper

use onion_core::{Account, AccountId, IdParseError, UserId};

use crate::models::AccountModel;

impl TryFrom<AccountModel> for Account {
    type Error = IdParseError;

    fn try_from(model: AccountModel) -> Result<Self, Self::Error> {
        Ok(Account::new(
            AccountId::parse(&model.account_id)?,
            UserId::parse(&model.owner_id)?,
        ))
    }
}
