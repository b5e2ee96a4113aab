/// Generic service container. Concrete adapters are chosen by
/// [`crate::application::create_service`]; tests inject mocks.
#[derive(Debug, Clone)]
pub struct Service<M, L> {
    pub(crate) menu_catalog: M,
    pub(crate) llm_client: L,
    pub(crate) restaurant_name: String,
}

impl<M, L> Service<M, L> {
    pub fn new(menu_catalog: M, llm_client: L, restaurant_name: String) -> Self {
        Self {
            menu_catalog,
            llm_client,
            restaurant_name,
        }
    }
}
