use gamedex_dal::Error;
use gamedex_dal::game::{CreateGame, GameRepositoryImpl};

async fn init_db() -> sqlx::Pool<sqlx::Sqlite> {
    const DB_URL: &str = "sqlite::memory:";
    let conn = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect(DB_URL)
        .await
        .unwrap();
    sqlx::migrate!("../../migrations").run(&conn).await.unwrap();

    conn
}

fn game_payload(name: &str, price: i64, developer: &str, platform: &str, year: i64) -> CreateGame {
    CreateGame {
        id: None,
        name: name.to_string(),
        price,
        developer: developer.to_string(),
        platform: platform.to_string(),
        year_of_publication: year,
    }
}

#[tokio::test]
async fn test_game_create() {
    let conn = init_db().await;
    let repo = GameRepositoryImpl::new(conn);

    let game = repo
        .create(game_payload("Minecraft", 10000, "Mojang", "Microsoft_Store", 2014))
        .await
        .unwrap();

    assert!(game.id > 0);
    assert_eq!(game.name, "Minecraft");
    assert_eq!(game.price, 10000);
    assert_eq!(game.developer, "Mojang");
    assert_eq!(game.platform, "Microsoft_Store");
    assert_eq!(game.year_of_publication, 2014);

    let stored = repo.find_by_id(game.id).await.unwrap().unwrap();
    assert_eq!(stored.name, game.name);
    assert_eq!(stored.price, game.price);
}

#[tokio::test]
async fn test_create_ignores_supplied_id() {
    let conn = init_db().await;
    let repo = GameRepositoryImpl::new(conn);

    let mut payload = game_payload("Tetris", 500, "Alexey Pajitnov", "Game_Boy", 1989);
    payload.id = Some(42);
    let game = repo.create(payload).await.unwrap();

    assert_ne!(game.id, 42);
    assert_eq!(repo.find_by_id(42).await.unwrap().map(|g| g.id), None);
}

#[tokio::test]
async fn test_game_update_overwrites_all_fields() {
    let conn = init_db().await;
    let repo = GameRepositoryImpl::new(conn);

    let game = repo
        .create(game_payload("Minecraft", 10000, "Mojang", "Microsoft_Store", 2014))
        .await
        .unwrap();

    let updated = repo
        .update(game.id, game_payload("Minecraft Dungeons", 20000, "Mojang Studios", "Steam", 2020))
        .await
        .unwrap();

    assert_eq!(updated.id, game.id);
    assert_eq!(updated.name, "Minecraft Dungeons");
    assert_eq!(updated.price, 20000);
    assert_eq!(updated.developer, "Mojang Studios");
    assert_eq!(updated.platform, "Steam");
    assert_eq!(updated.year_of_publication, 2020);
}

#[tokio::test]
async fn test_game_update_missing() {
    let conn = init_db().await;
    let repo = GameRepositoryImpl::new(conn);

    let res = repo
        .update(999, game_payload("Nothing", 1, "Nobody", "Nowhere", 2000))
        .await;
    assert!(matches!(res, Err(Error::RecordNotFound(_))));
}

#[tokio::test]
async fn test_game_delete() {
    let conn = init_db().await;
    let repo = GameRepositoryImpl::new(conn);

    let game = repo
        .create(game_payload("Minecraft", 10000, "Mojang", "Microsoft_Store", 2014))
        .await
        .unwrap();

    repo.delete(game.id).await.unwrap();
    assert!(repo.find_by_id(game.id).await.unwrap().is_none());

    let res = repo.delete(game.id).await;
    assert!(matches!(res, Err(Error::RecordNotFound(_))));
}

#[tokio::test]
async fn test_find_by_id_missing() {
    let conn = init_db().await;
    let repo = GameRepositoryImpl::new(conn);

    assert!(repo.find_by_id(12345).await.unwrap().is_none());
}

#[tokio::test]
async fn test_attribute_lookups() {
    let conn = init_db().await;
    let repo = GameRepositoryImpl::new(conn);

    repo.create(game_payload("Minecraft", 10000, "Mojang", "Microsoft_Store", 2014))
        .await
        .unwrap();
    repo.create(game_payload("Minecraft", 20000, "Mojang", "Steam", 2014))
        .await
        .unwrap();
    repo.create(game_payload("Factorio", 3000, "Wube", "Steam", 2020))
        .await
        .unwrap();

    let by_name = repo.find_by_name("Minecraft").await.unwrap();
    assert_eq!(by_name.len(), 2);

    let by_developer = repo.find_by_developer("Wube").await.unwrap();
    assert_eq!(by_developer.len(), 1);
    assert_eq!(by_developer[0].name, "Factorio");

    let by_platform = repo.find_by_platform("Steam").await.unwrap();
    assert_eq!(by_platform.len(), 2);

    assert!(repo.find_by_name("Unknown").await.unwrap().is_empty());
    assert!(repo.find_by_name("").await.unwrap().is_empty());
    assert!(repo.find_by_developer("").await.unwrap().is_empty());
    assert!(repo.find_by_platform("").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_names_both_persist() {
    let conn = init_db().await;
    let repo = GameRepositoryImpl::new(conn);

    let first = repo
        .create(game_payload("Minecraft", 10000, "Mojang", "Microsoft_Store", 2014))
        .await
        .unwrap();
    let second = repo
        .create(game_payload("Minecraft", 20000, "Mojang", "Microsoft_Store", 2014))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.price, second.price);

    let stored = repo.find_by_name("Minecraft").await.unwrap();
    assert_eq!(stored.len(), 2);
}
