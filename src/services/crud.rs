//! Generic create/read/update/delete service
//!
//! Each operation is a single gateway call, except update and delete which
//! first ask the gateway whether the id exists so a missing row answers
//! `NotFound` instead of being inserted or silently ignored. The check and
//! the mutation are two separate store calls.

use std::{marker::PhantomData, sync::Arc};

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::Entity,
    repository::Gateway,
};

pub struct CrudService<E, G: ?Sized = dyn Gateway<E>> {
    gateway: Arc<G>,
    _entity: PhantomData<fn() -> E>,
}

impl<E, G: ?Sized> Clone for CrudService<E, G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity, G: Gateway<E> + ?Sized> CrudService<E, G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            _entity: PhantomData,
        }
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    pub async fn list(&self) -> AppResult<Vec<E>> {
        self.gateway.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<E> {
        self.gateway
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<E>(id))
    }

    /// Persist a new record. A caller-supplied id is passed through as-is.
    pub async fn create(&self, data: E) -> AppResult<E> {
        data.validate()?;
        let created = self.gateway.save(data).await?;
        tracing::info!("Created {} {:?}", E::NAME, created.id());
        Ok(created)
    }

    /// Replace the record at `id`; the body's own id is overwritten
    pub async fn update(&self, id: i32, mut data: E) -> AppResult<E> {
        if !self.gateway.exists_by_id(id).await? {
            return Err(not_found::<E>(id));
        }
        data.set_id(id);
        data.validate()?;
        self.gateway.save(data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.gateway.exists_by_id(id).await? {
            return Err(not_found::<E>(id));
        }
        self.gateway.delete_by_id(id).await?;
        tracing::info!("Deleted {} {}", E::NAME, id);
        Ok(())
    }
}

fn not_found<E: Entity>(id: i32) -> AppError {
    AppError::NotFound(format!("{} {} not found", E::NAME, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Barber;
    use async_trait::async_trait;
    use mockall::{mock, predicate::eq};

    mock! {
        pub BarberStore {}

        #[async_trait]
        impl Gateway<Barber> for BarberStore {
            async fn find_all(&self) -> AppResult<Vec<Barber>>;
            async fn find_by_id(&self, id: i32) -> AppResult<Option<Barber>>;
            async fn exists_by_id(&self, id: i32) -> AppResult<bool>;
            async fn save(&self, entity: Barber) -> AppResult<Barber>;
            async fn delete_by_id(&self, id: i32) -> AppResult<()>;
        }
    }

    fn barber(id: Option<i32>, name: &str) -> Barber {
        Barber {
            id,
            name: name.to_string(),
        }
    }

    fn service(store: MockBarberStore) -> CrudService<Barber, MockBarberStore> {
        CrudService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let mut store = MockBarberStore::new();
        store
            .expect_find_by_id()
            .with(eq(5))
            .returning(|_| Ok(None));

        let result = service(store).get_by_id(5).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_forces_path_id() {
        let mut store = MockBarberStore::new();
        store
            .expect_exists_by_id()
            .with(eq(3))
            .returning(|_| Ok(true));
        store
            .expect_save()
            .withf(|b| b.id == Some(3) && b.name == "Luis")
            .times(1)
            .returning(Ok);

        let updated = service(store)
            .update(3, barber(Some(99), "Luis"))
            .await
            .unwrap();
        assert_eq!(updated.id, Some(3));
    }

    #[tokio::test]
    async fn update_missing_never_saves() {
        let mut store = MockBarberStore::new();
        store.expect_exists_by_id().returning(|_| Ok(false));
        store.expect_save().never();

        let result = service(store).update(8, barber(None, "Luis")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_missing_never_deletes() {
        let mut store = MockBarberStore::new();
        store.expect_exists_by_id().returning(|_| Ok(false));
        store.expect_delete_by_id().never();

        let result = service(store).delete(999).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_existing_calls_gateway() {
        let mut store = MockBarberStore::new();
        store.expect_exists_by_id().returning(|_| Ok(true));
        store
            .expect_delete_by_id()
            .with(eq(4))
            .times(1)
            .returning(|_| Ok(()));

        service(store).delete(4).await.unwrap();
    }

    #[tokio::test]
    async fn create_passes_supplied_id_through() {
        let mut store = MockBarberStore::new();
        store
            .expect_save()
            .withf(|b| b.id == Some(7))
            .times(1)
            .returning(Ok);

        let created = service(store).create(barber(Some(7), "Luis")).await.unwrap();
        assert_eq!(created.id, Some(7));
    }

    #[tokio::test]
    async fn create_rejects_overlong_name_before_store() {
        let mut store = MockBarberStore::new();
        store.expect_save().never();

        let result = service(store).create(barber(None, &"x".repeat(201))).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
