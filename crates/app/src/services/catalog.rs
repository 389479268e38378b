use std::sync::Arc;

use common::ProductId;
use domain::{Event, EventDispatcher, Money, Product, ProductService};
use persistence::ProductRepository;

use crate::error::Result;

/// Product catalog maintenance.
pub struct CatalogService<R: ProductRepository> {
    repository: R,
    dispatcher: Arc<EventDispatcher>,
}

impl<R: ProductRepository> CatalogService<R> {
    pub fn new(repository: R, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Creates and stores a product, then notifies `ProductCreated`.
    #[tracing::instrument(skip_all, fields(product_id, price = %price))]
    pub async fn add_product(
        &self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Product> {
        let product = Product::new(id, name, price)?;
        tracing::Span::current().record("product_id", product.id().as_str());

        self.repository.create(&product).await?;
        self.dispatcher.notify(&Event::product_created(&product))?;
        Ok(product)
    }

    /// Raises every catalog price by `percentage` and stores the new prices.
    #[tracing::instrument(skip(self))]
    pub async fn increase_prices(&self, percentage: i64) -> Result<Vec<Product>> {
        let mut products = self.repository.find_all().await?;
        ProductService::increase_price(&mut products, percentage)?;

        for product in &products {
            self.repository.update(product).await?;
        }

        tracing::info!(count = products.len(), "prices updated");
        Ok(products)
    }

    pub async fn products(&self) -> Result<Vec<Product>> {
        Ok(self.repository.find_all().await?)
    }
}
