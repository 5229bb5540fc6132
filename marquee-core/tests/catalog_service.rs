//! CRUD and lookup behavior of the public catalog surface.

mod support;

use marquee_core::CatalogError;
use marquee_model::EntityKind;
use support::{genre_draft, performer_draft, seed_genre, seed_performer, seed_title, service, tick};

#[tokio::test]
async fn blank_records_are_created_then_populated() {
    let (service, _) = service();

    let id = service.create_performer().await.unwrap();
    let blank = service.performer_by_id(id).await.unwrap();
    assert!(blank.name.is_empty());
    assert!(blank.slug.is_empty());

    service
        .update_performer(id, performer_draft("Jodie Comer", "jodie-comer"))
        .await
        .unwrap();
    let populated = service.performer_by_slug("jodie-comer").await.unwrap();
    assert_eq!(populated.id, id);
    assert_eq!(populated.name, "Jodie Comer");
}

#[tokio::test]
async fn lookups_by_unknown_keys_surface_typed_not_found() {
    let (service, _) = service();

    let err = service.performer_by_slug("nobody").await.unwrap_err();
    match err {
        CatalogError::NotFound { kind, key } => {
            assert_eq!(kind, EntityKind::Performer);
            assert_eq!(key, "nobody");
        }
        other => panic!("expected not-found, got {other}"),
    }

    let err = service.genre_by_slug("nothing").await.unwrap_err();
    assert!(matches!(
        err,
        CatalogError::NotFound {
            kind: EntityKind::Genre,
            ..
        }
    ));

    let err = service.title_by_slug("missing").await.unwrap_err();
    assert!(matches!(
        err,
        CatalogError::NotFound {
            kind: EntityKind::Title,
            ..
        }
    ));
}

#[tokio::test]
async fn delete_is_hard_and_not_idempotent() {
    let (service, _) = service();
    let id = seed_genre(&service, "Action", "action").await;

    let removed = service.delete_genre(id).await.unwrap();
    assert_eq!(removed.slug, "action");

    let err = service.delete_genre(id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn conflicting_slug_is_rejected_not_overwritten() {
    let (service, _) = service();
    seed_genre(&service, "Action", "action").await;
    let other = service.create_genre().await.unwrap();

    let err = service
        .update_genre(other, genre_draft("Also Action", "action"))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));

    // The original owner of the slug is untouched.
    let kept = service.genre_by_slug("action").await.unwrap();
    assert_eq!(kept.name, "Action");
}

#[tokio::test]
async fn title_listing_searches_and_sorts_newest_first() {
    let (service, _) = service();
    seed_title(&service, "Free Guy", "free-guy", vec![], vec![]).await;
    tick().await;
    seed_title(&service, "The Guy Ritchie Cut", "ritchie-cut", vec![], vec![]).await;
    tick().await;
    seed_title(&service, "Dune", "dune", vec![], vec![]).await;

    let all = service.titles(None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].slug, "dune");
    assert_eq!(all[2].slug, "free-guy");

    let guys = service.titles(Some("guy")).await.unwrap();
    assert_eq!(guys.len(), 2);
    assert_eq!(guys[0].slug, "ritchie-cut");
    assert_eq!(guys[1].slug, "free-guy");
}

#[tokio::test]
async fn genre_search_covers_description() {
    let (service, _) = service();
    let id = service.create_genre().await.unwrap();
    service
        .update_genre(
            id,
            marquee_model::GenreDraft {
                name: "Sci-Fi".to_string(),
                slug: "sci-fi".to_string(),
                description: "Spaceships and time travel".to_string(),
                icon_url: String::new(),
            },
        )
        .await
        .unwrap();

    let hits = service.genres(Some("spaceships")).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].slug, "sci-fi");
}

#[tokio::test]
async fn deleting_a_performer_leaves_title_references_dangling() {
    let (service, _) = service();
    let performer = seed_performer(&service, "Ryan Reynolds", "ryan-reynolds").await;
    let title = seed_title(&service, "Free Guy", "free-guy", vec![performer], vec![]).await;

    service.delete_performer(performer).await.unwrap();

    // The reference stays on the title; resolving it is the caller's
    // problem. The listing no longer knows the performer at all.
    let stored = service.title_by_id(title).await.unwrap();
    assert_eq!(stored.performers, vec![performer]);
    assert!(service.performers(None).await.unwrap().is_empty());

    let referencing = service.titles_by_performer(performer).await.unwrap();
    assert_eq!(referencing.len(), 1);
}
