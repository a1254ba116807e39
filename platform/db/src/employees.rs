use entity::employees;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Set, Unchanged,
};

/// Employee fields as supplied by callers; the id is assigned on insert.
#[derive(Clone, Debug)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

pub async fn save_employee<C>(db: &C, input: NewEmployee) -> Result<employees::Model, DbErr>
where
    C: ConnectionTrait,
{
    let model = employees::ActiveModel {
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        email: Set(input.email),
        ..Default::default()
    };
    model.insert(db).await
}

pub async fn save_employees<C>(
    db: &C,
    inputs: Vec<NewEmployee>,
) -> Result<Vec<employees::Model>, DbErr>
where
    C: ConnectionTrait,
{
    let mut saved = Vec::with_capacity(inputs.len());
    for input in inputs {
        saved.push(save_employee(db, input).await?);
    }
    Ok(saved)
}

pub async fn find_employee<C>(db: &C, id: i64) -> Result<Option<employees::Model>, DbErr>
where
    C: ConnectionTrait,
{
    employees::Entity::find_by_id(id).one(db).await
}

pub async fn all_employees<C>(db: &C) -> Result<Vec<employees::Model>, DbErr>
where
    C: ConnectionTrait,
{
    employees::Entity::find().all(db).await
}

/// Full-record overwrite; the caller supplies the id of an existing row.
pub async fn update_employee<C>(
    db: &C,
    employee: employees::Model,
) -> Result<employees::Model, DbErr>
where
    C: ConnectionTrait,
{
    let model = employees::ActiveModel {
        id: Unchanged(employee.id),
        first_name: Set(employee.first_name),
        last_name: Set(employee.last_name),
        email: Set(employee.email),
    };
    model.update(db).await
}

/// Idempotent; deleting an absent id is not an error.
pub async fn delete_employee<C>(db: &C, id: i64) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    employees::Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

pub async fn delete_all_employees<C>(db: &C) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let result = employees::Entity::delete_many().exec(db).await?;
    Ok(result.rows_affected)
}

pub async fn employee_count<C>(db: &C) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    employees::Entity::find().count(db).await
}
