//! User model -> entity mapper

use onion_core::{Email, IdParseError, User, UserId};

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = IdParseError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User::new(
            UserId::parse(&model.id)?,
            Email::from(model.email),
            model.first_name,
            model.last_name,
        ))
    }
}
