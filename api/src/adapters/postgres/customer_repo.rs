//! PostgreSQL adapter for CustomerRepository

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Schema,
    Set, SqlErr,
};

use crate::domain::entities::{Address, Customer, CustomerId};
use crate::domain::ports::CustomerRepository;
use crate::entity::customers;
use crate::error::DomainError;

/// PostgreSQL implementation of CustomerRepository
pub struct PostgresCustomerRepository {
    db: DatabaseConnection,
}

impl PostgresCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the `customers` table if it is missing
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);

        let mut stmt = schema.create_table_from_entity(customers::Entity);
        stmt.if_not_exists();

        self.db
            .execute(backend.build(&stmt))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        let result = customers::Entity::find_by_id(id.as_str().to_owned())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Customer::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let results = customers::Entity::find()
            .order_by_asc(customers::Column::CustomerId)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Customer::try_from).collect()
    }

    async fn insert(&self, customer: &Customer) -> Result<Option<Customer>, DomainError> {
        let model = to_active_model(customer)?;

        match model.insert(&self.db).await {
            Ok(saved) => Ok(Some(saved.try_into()?)),
            Err(DbErr::RecordNotInserted) => Ok(None),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(DomainError::AlreadyExists(
                    format!("Customer {} already exists", customer.customer_id),
                )),
                _ => Err(DomainError::Database(e.to_string())),
            },
        }
    }

    async fn save(&self, customer: &Customer) -> Result<Option<Customer>, DomainError> {
        let model = to_active_model(customer)?;

        // Full-document replace on key conflict
        let on_conflict = OnConflict::column(customers::Column::CustomerId)
            .update_columns([
                customers::Column::CustomerName,
                customers::Column::CustomerDob,
                customers::Column::PhoneNumber,
                customers::Column::Email,
                customers::Column::Password,
                customers::Column::Addresses,
            ])
            .to_owned();

        let result = customers::Entity::insert(model)
            .on_conflict(on_conflict)
            .exec_with_returning(&self.db)
            .await;

        match result {
            Ok(saved) => Ok(Some(saved.try_into()?)),
            Err(DbErr::RecordNotInserted) | Err(DbErr::RecordNotFound(_)) => Ok(None),
            Err(e) => Err(DomainError::Database(e.to_string())),
        }
    }

    async fn delete_by_id(&self, id: &CustomerId) -> Result<(), DomainError> {
        customers::Entity::delete_by_id(id.as_str().to_owned())
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

fn to_active_model(customer: &Customer) -> Result<customers::ActiveModel, DomainError> {
    let addresses = serde_json::to_value(&customer.addresses)?;

    Ok(customers::ActiveModel {
        customer_id: Set(customer.customer_id.0.clone()),
        customer_name: Set(customer.customer_name.clone()),
        customer_dob: Set(customer.customer_dob),
        phone_number: Set(customer.phone_number.clone()),
        email: Set(customer.email.clone()),
        password: Set(customer.password.clone()),
        addresses: Set(addresses),
    })
}

/// Convert SeaORM model to domain entity
impl TryFrom<customers::Model> for Customer {
    type Error = DomainError;

    fn try_from(model: customers::Model) -> Result<Self, Self::Error> {
        let addresses = match model.addresses {
            serde_json::Value::Null => Vec::new(),
            value => serde_json::from_value::<Vec<Address>>(value)?,
        };

        Ok(Customer {
            customer_id: CustomerId(model.customer_id),
            customer_name: model.customer_name,
            customer_dob: model.customer_dob,
            phone_number: model.phone_number,
            email: model.email,
            password: model.password,
            addresses,
        })
    }
}
