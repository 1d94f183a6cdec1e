use record_actor::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use std::collections::BTreeMap;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Member {
    id: u32,
    name: String,
}

#[derive(Debug)]
struct MemberCreate {
    name: String,
}

#[derive(Debug)]
enum MemberQuery {
    NamePrefix(String),
    Page { skip: usize, take: usize },
}

#[derive(Debug, thiserror::Error)]
enum MemberError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("page size must be positive")]
    EmptyPage,
    #[error("{0}")]
    Communication(String),
}

impl ActorEntity for Member {
    type Id = u32;
    type Create = MemberCreate;
    type Query = MemberQuery;
    type Error = MemberError;

    fn from_create_params(id: u32, params: MemberCreate) -> Result<Self, MemberError> {
        if params.name.is_empty() {
            return Err(MemberError::EmptyName);
        }
        Ok(Self {
            id,
            name: params.name,
        })
    }

    fn select(store: &BTreeMap<u32, Self>, query: &MemberQuery) -> Result<Vec<Self>, MemberError> {
        match query {
            MemberQuery::NamePrefix(prefix) => Ok(store
                .values()
                .filter(|m| m.name.starts_with(prefix.as_str()))
                .cloned()
                .collect()),
            MemberQuery::Page { take: 0, .. } => Err(MemberError::EmptyPage),
            MemberQuery::Page { skip, take } => {
                Ok(store.values().skip(*skip).take(*take).cloned().collect())
            }
        }
    }
}

struct MemberClient {
    inner: ResourceClient<Member>,
}

impl ActorClient<Member> for MemberClient {
    type Error = MemberError;

    fn inner(&self) -> &ResourceClient<Member> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> MemberError {
        MemberError::Communication(e.to_string())
    }
}

fn counting_ids() -> impl FnMut() -> u32 + Send + 'static {
    let mut next = 0;
    move || {
        next += 1;
        next
    }
}

async fn create(client: &ResourceClient<Member>, name: &str) -> u32 {
    client
        .create(MemberCreate { name: name.into() })
        .await
        .expect("create failed")
}

#[tokio::test]
async fn create_get_and_query() {
    let (actor, client) = ResourceActor::<Member>::new(8, counting_ids());
    let handle = tokio::spawn(actor.run());

    let ada = create(&client, "Ada").await;
    let alan = create(&client, "Alan").await;
    let _grace = create(&client, "Grace").await;

    let fetched = client.get(ada).await.unwrap().expect("Ada missing");
    assert_eq!(fetched.name, "Ada");
    assert!(client.get(999).await.unwrap().is_none());

    let a_names = client
        .query(MemberQuery::NamePrefix("A".into()))
        .await
        .unwrap();
    assert_eq!(
        a_names.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![ada, alan]
    );

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn paged_query_follows_id_order() {
    let (actor, client) = ResourceActor::<Member>::new(8, counting_ids());
    tokio::spawn(actor.run());

    for name in ["a", "b", "c", "d", "e"] {
        create(&client, name).await;
    }

    let page = client
        .query(MemberQuery::Page { skip: 1, take: 2 })
        .await
        .unwrap();
    assert_eq!(
        page.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
        vec!["b", "c"]
    );
}

#[tokio::test]
async fn entity_errors_are_boxed() {
    let (actor, client) = ResourceActor::<Member>::new(8, counting_ids());
    tokio::spawn(actor.run());

    let created = client.create(MemberCreate { name: String::new() }).await;
    assert!(matches!(created, Err(FrameworkError::EntityError(_))));

    let queried = client.query(MemberQuery::Page { skip: 0, take: 0 }).await;
    match queried {
        Err(FrameworkError::EntityError(e)) => {
            assert_eq!(e.to_string(), "page size must be positive")
        }
        other => panic!("expected entity error, got {other:?}"),
    }
}

#[tokio::test]
async fn repeated_id_does_not_overwrite() {
    let (actor, client) = ResourceActor::<Member>::new(8, || 42);
    tokio::spawn(actor.run());

    assert_eq!(create(&client, "first").await, 42);
    let second = client
        .create(MemberCreate {
            name: "second".into(),
        })
        .await;
    assert!(matches!(second, Err(FrameworkError::DuplicateId(id)) if id == "42"));

    let kept = client.get(42).await.unwrap().unwrap();
    assert_eq!(kept.name, "first");
}

#[tokio::test]
async fn domain_client_inherits_reads() {
    let (actor, inner) = ResourceActor::<Member>::new(8, counting_ids());
    tokio::spawn(actor.run());
    let id = create(&inner, "Barbara").await;

    let client = MemberClient { inner };
    let found = client.get(id).await.unwrap();
    assert_eq!(found.map(|m| m.name), Some("Barbara".to_string()));

    let hits = client
        .query(MemberQuery::NamePrefix("B".into()))
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn closed_actor_is_reported() {
    let (actor, client) = ResourceActor::<Member>::new(8, counting_ids());
    drop(actor);

    let result = client.get(1).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
