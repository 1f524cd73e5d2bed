use std::sync::Arc;

use business::domain::logger::Logger;
use logger::TracingLogger;
use persistence::ingredient::repository::IngredientRepositoryPostgres;
use persistence::notification::repository::NotificationRepositoryPostgres;
use persistence::shopping_list::repository::ShoppingListRepositoryPostgres;
use persistence::shopping_list_item::repository::ShoppingListItemRepositoryPostgres;

use business::application::ingredient::create::CreateIngredientUseCaseImpl;
use business::application::ingredient::get_all::GetAllIngredientsUseCaseImpl;
use business::application::notification::create::CreateNotificationUseCaseImpl;
use business::application::notification::get_all::GetAllNotificationsUseCaseImpl;
use business::application::notification::mark_sent::MarkNotificationSentUseCaseImpl;
use business::application::notification::record_failure::RecordNotificationFailureUseCaseImpl;
use business::application::shopping_list::add_item::AddShoppingListItemUseCaseImpl;
use business::application::shopping_list::complete::CompleteShoppingListUseCaseImpl;
use business::application::shopping_list::create::CreateShoppingListUseCaseImpl;
use business::application::shopping_list::delete::DeleteShoppingListUseCaseImpl;
use business::application::shopping_list::delete_item::DeleteShoppingListItemUseCaseImpl;
use business::application::shopping_list::get_all::GetAllShoppingListsUseCaseImpl;
use business::application::shopping_list::get_by_id::GetShoppingListByIdUseCaseImpl;
use business::application::shopping_list::mark_purchased::MarkItemPurchasedUseCaseImpl;

use crate::api::health::routes::Api as HealthApi;
use crate::api::ingredient::routes::IngredientApi;
use crate::api::notification::routes::NotificationApi;
use crate::api::shopping_list::routes::ShoppingListApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub ingredient_api: IngredientApi,
    pub shopping_list_api: ShoppingListApi,
    pub notification_api: NotificationApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let ingredient_repository = Arc::new(IngredientRepositoryPostgres::new(pool.clone()));
        let list_repository = Arc::new(ShoppingListRepositoryPostgres::new(pool.clone()));
        let item_repository = Arc::new(ShoppingListItemRepositoryPostgres::new(pool.clone()));
        let notification_repository = Arc::new(NotificationRepositoryPostgres::new(pool));

        // Ingredient use cases
        let ingredient_api = IngredientApi::new(
            Arc::new(CreateIngredientUseCaseImpl {
                repository: ingredient_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllIngredientsUseCaseImpl {
                repository: ingredient_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Shopping list use cases
        let shopping_list_api = ShoppingListApi::new(
            Arc::new(CreateShoppingListUseCaseImpl {
                repository: list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllShoppingListsUseCaseImpl {
                repository: list_repository.clone(),
                item_repository: item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetShoppingListByIdUseCaseImpl {
                repository: list_repository.clone(),
                item_repository: item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(CompleteShoppingListUseCaseImpl {
                repository: list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteShoppingListUseCaseImpl {
                repository: list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(AddShoppingListItemUseCaseImpl {
                repository: list_repository.clone(),
                item_repository: item_repository.clone(),
                ingredient_repository,
                logger: logger.clone(),
            }),
            Arc::new(MarkItemPurchasedUseCaseImpl {
                item_repository: item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteShoppingListItemUseCaseImpl {
                item_repository,
                logger: logger.clone(),
            }),
        );

        // Notification use cases
        let notification_api = NotificationApi::new(
            Arc::new(CreateNotificationUseCaseImpl {
                repository: notification_repository.clone(),
                shopping_list_repository: list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllNotificationsUseCaseImpl {
                repository: notification_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(MarkNotificationSentUseCaseImpl {
                repository: notification_repository.clone(),
                shopping_list_repository: list_repository,
                logger: logger.clone(),
            }),
            Arc::new(RecordNotificationFailureUseCaseImpl {
                repository: notification_repository,
                logger,
            }),
        );

        Self {
            health_api: HealthApi::new(),
            ingredient_api,
            shopping_list_api,
            notification_api,
        }
    }
}
