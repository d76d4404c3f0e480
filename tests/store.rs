mod common;

use users_books_api::models::{Book, BookPayload, User, UserPayload};
use users_books_api::store::{Arg, Repository, StoreError};

fn user_payload(name: &str, email: &str, password: &str) -> UserPayload {
    UserPayload {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn book_payload(title: &str, author: &str, year: i64) -> BookPayload {
    BookPayload {
        title: title.to_string(),
        author: author.to_string(),
        year,
        token: String::new(),
    }
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let repo: Repository<User> = Repository::new(common::test_pool().await);

    let created = repo
        .create(&user_payload("iron", "m@rvel", "man"))
        .await
        .unwrap();
    assert!(created.id >= 1);
    assert!(created.token.is_none());
    assert!(created.deleted_at.is_none());

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched.name, "iron");
    assert_eq!(fetched.email, "m@rvel");
    assert_eq!(fetched.password, "man");
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn soft_delete_hides_record_from_get_and_list() {
    let repo: Repository<User> = Repository::new(common::test_pool().await);

    let keep = repo.create(&user_payload("a", "a@x", "pw")).await.unwrap();
    let gone = repo.create(&user_payload("b", "b@x", "pw")).await.unwrap();

    repo.delete_by_id(gone.id).await.unwrap();

    assert!(matches!(
        repo.get_by_id(gone.id).await,
        Err(StoreError::NotFound)
    ));

    let live = repo.list().await.unwrap();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].id, keep.id);
}

#[tokio::test]
async fn partial_update_skips_default_fields() {
    let repo: Repository<Book> = Repository::new(common::test_pool().await);

    let book = repo.create(&book_payload("X", "Y", 2000)).await.unwrap();

    let updated = repo
        .update_by_id(book.id, &book_payload("Z", "", 0))
        .await
        .unwrap();

    assert_eq!(updated.title, "Z");
    assert_eq!(updated.author, "Y");
    assert_eq!(updated.year, 2000);
}

#[tokio::test]
async fn update_with_no_changes_leaves_row_untouched() {
    let repo: Repository<Book> = Repository::new(common::test_pool().await);

    let book = repo.create(&book_payload("X", "Y", 2000)).await.unwrap();
    let updated = repo
        .update_by_id(book.id, &book_payload("", "", 0))
        .await
        .unwrap();

    assert_eq!(updated.title, "X");
    assert_eq!(updated.updated_at, book.updated_at);
}

#[tokio::test]
async fn get_and_update_on_missing_or_deleted_id_are_not_found() {
    let repo: Repository<Book> = Repository::new(common::test_pool().await);

    assert!(matches!(
        repo.get_by_id(9999).await,
        Err(StoreError::NotFound)
    ));
    assert!(matches!(
        repo.update_by_id(9999, &book_payload("Z", "", 0)).await,
        Err(StoreError::NotFound)
    ));

    let book = repo.create(&book_payload("X", "Y", 2000)).await.unwrap();
    repo.delete_by_id(book.id).await.unwrap();

    assert!(matches!(
        repo.get_by_id(book.id).await,
        Err(StoreError::NotFound)
    ));
    assert!(matches!(
        repo.update_by_id(book.id, &book_payload("Z", "", 0)).await,
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn delete_does_not_verify_existence() {
    let repo: Repository<Book> = Repository::new(common::test_pool().await);

    // Never-existed id reports success.
    repo.delete_by_id(1234).await.unwrap();

    // Deleting twice reports success both times.
    let book = repo.create(&book_payload("X", "Y", 2000)).await.unwrap();
    repo.delete_by_id(book.id).await.unwrap();
    repo.delete_by_id(book.id).await.unwrap();
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let repo: Repository<Book> = Repository::new(common::test_pool().await);

    let first = repo.create(&book_payload("X", "Y", 2000)).await.unwrap();
    repo.delete_by_id(first.id).await.unwrap();

    let second = repo.create(&book_payload("V", "W", 2001)).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn find_all_by_matches_exactly_on_live_rows() {
    let repo: Repository<User> = Repository::new(common::test_pool().await);

    let first = repo
        .create(&user_payload("iron", "m@rvel", "man"))
        .await
        .unwrap();
    // Email carries no uniqueness guarantee; both rows must come back.
    let second = repo
        .create(&user_payload("pepper", "m@rvel", "potts"))
        .await
        .unwrap();

    let found = repo.find_all_by("email", Arg::text("m@rvel")).await.unwrap();
    let ids: Vec<i64> = found.iter().map(|u| u.id).collect();
    assert_eq!(found.len(), 2);
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    // Case-sensitive byte equality.
    assert!(repo
        .find_all_by("email", Arg::text("M@RVEL"))
        .await
        .unwrap()
        .is_empty());

    repo.delete_by_id(first.id).await.unwrap();
    let found = repo.find_all_by("email", Arg::text("m@rvel")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, second.id);
}
