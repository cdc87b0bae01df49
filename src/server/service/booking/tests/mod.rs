
use railbook_test_utils::prelude::*;

use crate::model::user::UserDto;

/// Builds the caller passed to ticket operations from a fixture user
fn caller(user: &entity::railbook_user::Model) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        is_staff: user.is_staff,
        created_at: user.created_at,
    }
}
