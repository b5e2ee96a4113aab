use crate::domain::{
    chat::ports::LlmClient,
    common::{entities::app_errors::CoreError, services::Service},
    menu::{
        entities::Dish,
        ports::{MenuCatalog, MenuService},
    },
};

impl<M, L> MenuService for Service<M, L>
where
    M: MenuCatalog,
    L: LlmClient,
{
    fn sample(&self, count: usize) -> Result<Vec<Dish>, CoreError> {
        let dishes = self.menu_catalog.dishes();
        if dishes.is_empty() {
            return Err(CoreError::MenuUnavailable);
        }

        Ok(dishes.into_iter().take(count).collect())
    }
}
