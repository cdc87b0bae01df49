use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginPayload, RegisterPayload, UpdateUserPayload, UserDto},
    server::{
        data::user::{NewUser, UserRepository},
        error::{auth::AuthError, validation::ValidationError, Error},
        service::password::{hash_password, verify_password, MIN_PASSWORD_LENGTH},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a regular user account
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ValidationError)` - Malformed email, short password or email already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, payload: RegisterPayload) -> Result<UserDto, Error> {
        let email = normalize_email(&payload.email);
        validate_email(&email)?;
        validate_password(&payload.password)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(ValidationError::conflict(
                "email",
                "user with this email already exists.",
            )
            .into());
        }

        let user = user_repo
            .create(NewUser {
                email,
                password_hash: hash_password(&payload.password)?,
                first_name: payload.first_name,
                last_name: payload.last_name,
                is_staff: false,
            })
            .await?;

        tracing::info!(user_id = %user.id, "Registered user");

        Ok(user_dto(user))
    }

    /// Checks credentials and returns the matching user
    pub async fn login(&self, payload: LoginPayload) -> Result<UserDto, Error> {
        let email = normalize_email(&payload.email);

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&payload.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user_dto(user))
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(user_dto))
    }

    /// Updates names and optionally the password, omitted fields keep their value
    pub async fn update_profile(
        &self,
        user_id: i32,
        payload: UpdateUserPayload,
    ) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .get_by_id(user_id)
            .await?
            .ok_or(Error::NotFound("User"))?;

        let password_hash = match payload.password {
            Some(password) => {
                validate_password(&password)?;
                Some(hash_password(&password)?)
            }
            None => None,
        };

        let user = user_repo
            .update_profile(
                user.id,
                payload.first_name.unwrap_or(user.first_name),
                payload.last_name.unwrap_or(user.last_name),
                password_hash,
            )
            .await?
            .ok_or(Error::NotFound("User"))?;

        Ok(user_dto(user))
    }

    /// Creates the administrator account or grants staff to an existing account with the email
    ///
    /// The password of an existing account is left untouched.
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<UserDto, Error> {
        let email = normalize_email(email);
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_email(&email).await? {
            if user.is_staff {
                return Ok(user_dto(user));
            }

            let user = user_repo
                .set_staff(user.id, true)
                .await?
                .ok_or(Error::NotFound("User"))?;

            tracing::info!(user_id = %user.id, "Granted staff permissions to admin account");

            return Ok(user_dto(user));
        }

        validate_email(&email)?;
        validate_password(password)?;

        let user = user_repo
            .create(NewUser {
                email,
                password_hash: hash_password(password)?,
                first_name: String::new(),
                last_name: String::new(),
                is_staff: true,
            })
            .await?;

        tracing::info!(user_id = %user.id, "Created admin account");

        Ok(user_dto(user))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::invalid(
            "email",
            "Enter a valid email address.",
        )),
    }
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::invalid(
            "password",
            format!(
                "Ensure this field has at least {} characters.",
                MIN_PASSWORD_LENGTH
            ),
        ));
    }

    Ok(())
}

fn user_dto(user: entity::railbook_user::Model) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        is_staff: user.is_staff,
        created_at: user.created_at,
    }
}
