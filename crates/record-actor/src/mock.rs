//! # Mock Client
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of a running actor. Code
//! under test cannot tell the difference.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, answers are scripted | Real records |
//! | **Error Injection** | `return_err` on any call | Needs a failing entity |
//! | **Call Counting** | [`MockClient::calls`] | Not available |
//! | **Use Case** | Logic built on top of a client | The entity or the full system |
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut catalog = MockClient::<Product>::new();
//! catalog.expect_query().return_ok(vec![widget]);
//!
//! let client = ProductClient::new(catalog.client());
//! // ... exercise code that uses `client` ...
//!
//! catalog.verify();                 // every expectation consumed
//! assert_eq!(catalog.calls(), 1);   // and nothing beyond them
//! let seen = catalog.take_queries(); // the queries that were sent
//! ```
//!
//! A request that does not match the next expectation (or arrives after the
//! queue is empty) panics the mock task. The caller then observes
//! [`FrameworkError::ActorDropped`](crate::FrameworkError::ActorDropped), which fails the test.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Query {
        response: Result<Vec<T>, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    queries: Arc<Mutex<Vec<T::Query>>>,
    calls: Arc<AtomicUsize>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queries = Arc::new(Mutex::new(Vec::new()));
        let calls = Arc::new(AtomicUsize::new(0));

        let task_expectations = expectations.clone();
        let task_queries = queries.clone();
        let task_calls = calls.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                task_calls.fetch_add(1, Ordering::SeqCst);
                let expectation = lock(&task_expectations).pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "MockClient: get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Query { query, respond_to },
                        Some(Expectation::Query { response }),
                    ) => {
                        lock(&task_queries).push(query);
                        let _ = respond_to.send(response);
                    }
                    (request, None) => {
                        panic!("MockClient: unexpected request {request:?}");
                    }
                    (request, Some(_)) => {
                        panic!("MockClient: request {request:?} does not match the next expectation");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            queries,
            calls,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for exactly this id.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query`.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<T> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Number of requests received so far, expected or not.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Drains the queries received so far, in arrival order.
    pub fn take_queries(&self) -> Vec<T::Query> {
        std::mem::take(&mut *lock(&self.queries))
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        lock(&self.expectations).push_back(Expectation::Get {
            id: self.id,
            response,
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        lock(&self.expectations).push_back(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> QueryExpectationBuilder<T> {
    pub fn return_ok(self, records: Vec<T>) {
        lock(&self.expectations).push_back(Expectation::Query {
            response: Ok(records),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Query {
            response: Err(error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct TagCreate;

    #[derive(Debug, PartialEq)]
    struct AllTags;

    #[derive(Debug, thiserror::Error)]
    #[error("tag error")]
    struct TagError;

    impl ActorEntity for Tag {
        type Id = u32;
        type Create = TagCreate;
        type Query = AllTags;
        type Error = TagError;

        fn from_create_params(id: u32, _: TagCreate) -> Result<Self, TagError> {
            Ok(Self {
                id,
                label: String::new(),
            })
        }

        fn select(store: &BTreeMap<u32, Self>, _: &AllTags) -> Result<Vec<Self>, TagError> {
            Ok(store.values().cloned().collect())
        }
    }

    fn tag(id: u32, label: &str) -> Tag {
        Tag {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn answers_in_expectation_order() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_get(7).return_ok(Some(tag(7, "red")));
        mock.expect_query().return_ok(vec![tag(1, "a"), tag(2, "b")]);
        mock.expect_create().return_ok(3);

        let client = mock.client();
        assert_eq!(client.get(7).await.unwrap(), Some(tag(7, "red")));
        assert_eq!(client.query(AllTags).await.unwrap().len(), 2);
        assert_eq!(client.create(TagCreate).await.unwrap(), 3);

        mock.verify();
        assert_eq!(mock.calls(), 3);
        assert_eq!(mock.take_queries(), vec![AllTags]);
    }

    #[tokio::test]
    async fn injected_error_reaches_caller() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_query().return_err(FrameworkError::ActorClosed);

        let result = mock.client().query(AllTags).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
        mock.verify();
    }

    #[tokio::test]
    async fn unexpected_request_surfaces_as_dropped() {
        let mock = MockClient::<Tag>::new();

        let result = mock.client().get(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn verify_reports_unused_expectations() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_get(1).return_ok(None);
        mock.verify();
    }
}
