#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.user_id_empty")]
    UserIdEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
