use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity::{
        category::{Column as CategoryCol, Entity as Categories, Model as CategoryModel},
        department::{Column as DepartmentCol, Entity as Departments, Model as DepartmentModel},
        product_category::Column as ProductCategoryCol,
    },
    error::{AppError, AppResult},
    models::{Category, CategoryBrief, Department},
    response::Rows,
    state::AppState,
};

pub async fn list_departments(state: &AppState) -> AppResult<Vec<Department>> {
    let departments = Departments::find()
        .order_by_asc(DepartmentCol::DepartmentId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(department_from_entity)
        .collect();
    Ok(departments)
}

pub async fn get_department(state: &AppState, department_id: i32) -> AppResult<Department> {
    Departments::find_by_id(department_id)
        .one(&state.orm)
        .await?
        .map(department_from_entity)
        .ok_or_else(|| AppError::not_found("Department", department_id))
}

pub async fn list_categories(state: &AppState) -> AppResult<Rows<Category>> {
    let categories: Vec<Category> = Categories::find()
        .order_by_asc(CategoryCol::CategoryId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();
    Ok(categories.into())
}

pub async fn get_category(state: &AppState, category_id: i32) -> AppResult<Category> {
    Categories::find_by_id(category_id)
        .one(&state.orm)
        .await?
        .map(category_from_entity)
        .ok_or_else(|| AppError::not_found("Category", category_id))
}

pub async fn categories_in_product(
    state: &AppState,
    product_id: i32,
) -> AppResult<Vec<CategoryBrief>> {
    let categories = Categories::find()
        .inner_join(crate::entity::ProductCategories)
        .filter(ProductCategoryCol::ProductId.eq(product_id))
        .order_by_asc(CategoryCol::CategoryId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|model| CategoryBrief {
            category_id: model.category_id,
            department_id: model.department_id,
            name: model.name,
        })
        .collect();
    Ok(categories)
}

pub async fn categories_in_department(
    state: &AppState,
    department_id: i32,
) -> AppResult<Rows<Category>> {
    let categories: Vec<Category> = Categories::find()
        .filter(CategoryCol::DepartmentId.eq(department_id))
        .order_by_asc(CategoryCol::CategoryId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();
    Ok(categories.into())
}

fn department_from_entity(model: DepartmentModel) -> Department {
    Department {
        department_id: model.department_id,
        name: model.name,
        description: model.description,
    }
}

fn category_from_entity(model: CategoryModel) -> Category {
    Category {
        category_id: model.category_id,
        department_id: model.department_id,
        name: model.name,
        description: model.description,
    }
}
