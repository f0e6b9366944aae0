use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use storage::LocalImageStore;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_for_edit::GetProductForEditUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::storage_config::StorageConfig;
use crate::web::products::handlers::ProductPages;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub product_pages: Arc<ProductPages>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, storage: &StorageConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));
        let image_store = Arc::new(LocalImageStore::new(storage.images_dir.clone()));

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_for_edit_use_case = Arc::new(GetProductForEditUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            image_store: image_store.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            image_store: image_store.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            image_store,
            logger,
        });

        let product_api = ProductApi::new(get_all_use_case.clone(), get_by_id_use_case.clone());

        let product_pages = Arc::new(ProductPages {
            get_all_use_case,
            get_by_id_use_case,
            get_for_edit_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        });

        Self {
            health_api: HealthApi,
            product_api,
            product_pages,
        }
    }
}
