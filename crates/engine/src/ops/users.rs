use sea_orm::{ActiveValue, QueryFilter, QueryOrder, QuerySelect, prelude::*};

use crate::{
    EngineError, NewUser, ResultEngine, User, UserSummary, costs, users, util::UserKey,
};

use super::Engine;

impl Engine {
    /// Looks a user up by id and totals every cost recorded for them.
    ///
    /// A user without costs, or whose id is not numeric, has a total of `0`.
    pub async fn user_summary(&self, id: &str) -> ResultEngine<UserSummary> {
        let key = UserKey::parse(id);

        let user = users::Entity::find_by_id(key.canonical.clone())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("User".to_string()))?;

        let total = match key.number {
            Some(userid) => self.total_for_user(userid).await?,
            None => 0.0,
        };

        Ok(UserSummary {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            total,
        })
    }

    async fn total_for_user(&self, userid: i64) -> ResultEngine<f64> {
        let total: Option<Option<f64>> = costs::Entity::find()
            .select_only()
            .column_as(costs::Column::Sum.sum(), "total")
            .filter(costs::Column::Userid.eq(userid))
            .into_tuple()
            .one(&self.database)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }

    /// Registers a user. The id is stored in canonical form.
    pub async fn create_user(&self, user: NewUser) -> ResultEngine<User> {
        let key = UserKey::parse(&user.id);
        if key.canonical.is_empty() {
            return Err(EngineError::InvalidUser("id must not be empty".to_string()));
        }
        let first_name = required_text(&user.first_name, "first_name")?;
        let last_name = required_text(&user.last_name, "last_name")?;
        let marital_status = required_text(&user.marital_status, "marital_status")?;

        if users::Entity::find_by_id(key.canonical.clone())
            .one(&self.database)
            .await?
            .is_some()
        {
            return Err(EngineError::ExistingKey(key.canonical));
        }

        let model = users::ActiveModel {
            id: ActiveValue::Set(key.canonical),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            birthday: ActiveValue::Set(user.birthday),
            marital_status: ActiveValue::Set(marital_status),
        }
        .insert(&self.database)
        .await?;

        Ok(User::from(model))
    }

    pub async fn list_users(&self) -> ResultEngine<Vec<User>> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(User::from).collect())
    }
}

fn required_text(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidUser(format!("{label} must not be empty")));
    }
    Ok(trimmed.to_string())
}
