//! Mapping for outcomes that are still pending.
//!
//! Each adapter awaits the inner value exactly once and then applies the same
//! rules as the synchronous [`Mapper`] methods. Nothing is reinterpreted on the
//! way: an `Err` from the inner future is returned as-is, and dropping the
//! adapter's future drops the inner one.

use std::future::IntoFuture;

use crate::{Mapper, NoContent, Outcome, ProblemBody, Response};

impl Mapper {
    /// Await `pending`, then map it like [`Mapper::ok`].
    ///
    /// # Examples
    /// ```
    /// use domain_results::{Mapper, Outcome, Status};
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let pending = async { Outcome::success("ready") };
    /// let response = Mapper::default().ok_async(pending).await;
    /// assert_eq!(response.status(), Status::OK);
    /// # });
    /// ```
    pub async fn ok_async<P, T>(&self, pending: P) -> Response<T>
    where
        P: IntoFuture<Output = Outcome<T>>,
        T: NoContent,
    {
        let outcome = pending.await;
        self.ok(outcome)
    }

    /// Await `pending`, then map it like [`Mapper::map`].
    pub async fn map_async<P, T, R, F>(&self, pending: P, payload_to_response: F) -> Response<R>
    where
        P: IntoFuture<Output = Outcome<T>>,
        T: NoContent,
        F: FnOnce(T) -> Response<R>,
    {
        let outcome = pending.await;
        self.map(outcome, payload_to_response)
    }

    /// Await `pending`, then map it like [`Mapper::map_with`].
    pub async fn map_async_with<P, T, R, F, A>(
        &self,
        pending: P,
        payload_to_response: F,
        error_action: A,
    ) -> Response<R>
    where
        P: IntoFuture<Output = Outcome<T>>,
        T: NoContent,
        F: FnOnce(T) -> Response<R>,
        A: FnOnce(&mut ProblemBody<'_>, &Outcome<T>),
    {
        let outcome = pending.await;
        self.map_with(outcome, payload_to_response, error_action)
    }

    /// Await a fallible `pending` outcome and map it like [`Mapper::map`].
    ///
    /// # Errors
    /// Returns the inner future's error unchanged; it is never converted into
    /// a failed outcome.
    pub async fn try_map_async<P, T, E, R, F>(
        &self,
        pending: P,
        payload_to_response: F,
    ) -> Result<Response<R>, E>
    where
        P: IntoFuture<Output = Result<Outcome<T>, E>>,
        T: NoContent,
        F: FnOnce(T) -> Response<R>,
    {
        let outcome = pending.await?;
        Ok(self.map(outcome, payload_to_response))
    }

    /// Await a pending pair, then map it like [`Mapper::map_pair`].
    pub async fn map_pair_async<P, V, U, R, F>(
        &self,
        pending: P,
        payload_to_response: F,
    ) -> Response<R>
    where
        P: IntoFuture<Output = (V, Outcome<U>)>,
        V: NoContent,
        F: FnOnce(V) -> Response<R>,
    {
        let pair = pending.await;
        self.map_pair(pair, payload_to_response)
    }

    /// Await a pending pair, then map it like [`Mapper::map_pair_with`].
    pub async fn map_pair_async_with<P, V, U, R, F, A>(
        &self,
        pending: P,
        payload_to_response: F,
        error_action: A,
    ) -> Response<R>
    where
        P: IntoFuture<Output = (V, Outcome<U>)>,
        V: NoContent,
        F: FnOnce(V) -> Response<R>,
        A: FnOnce(&mut ProblemBody<'_>, &Outcome<U>),
    {
        let pair = pending.await;
        self.map_pair_with(pair, payload_to_response, error_action)
    }

    /// Await a pending pair, then map it like [`Mapper::created`].
    pub async fn created_async<P, V, U>(&self, pending: P, location: impl AsRef<str>) -> Response<V>
    where
        P: IntoFuture<Output = (V, Outcome<U>)>,
        V: NoContent,
    {
        let pair = pending.await;
        self.created(pair, location)
    }

    /// Await a pending pair, then map it like [`Mapper::created_with`].
    pub async fn created_with_async<P, V, U, L, G>(&self, pending: P, locate: G) -> Response<V>
    where
        P: IntoFuture<Output = (V, Outcome<U>)>,
        V: NoContent,
        L: AsRef<str>,
        G: FnOnce(&V) -> L,
    {
        let pair = pending.await;
        self.created_with(pair, locate)
    }
}
