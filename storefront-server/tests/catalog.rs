//! Catalog listings, sorting and search.

mod common;

use common::{draft, line_item, test_state, MockProcessor};
use rust_decimal::Decimal;
use storefront_server::db::repository::{
    CategoryRepository, ProductRepository, ProductSort,
};

#[tokio::test]
async fn sort_param_parsing_falls_back_to_newest() {
    assert_eq!(ProductSort::from_param(Some("price_asc")), ProductSort::PriceAsc);
    assert_eq!(ProductSort::from_param(Some("best_sellers")), ProductSort::BestSellers);
    assert_eq!(ProductSort::from_param(Some("garbage")), ProductSort::Newest);
    assert_eq!(ProductSort::from_param(None), ProductSort::Newest);
}

#[tokio::test]
async fn price_ascending_orders_cheapest_first() {
    let state = test_state(MockProcessor::paid()).await;
    let repo = ProductRepository::new(state.db.pool.clone());

    let products = repo
        .find_by_establishment(1, ProductSort::PriceAsc)
        .await
        .unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Feijão Carioca");
    assert_eq!(products[0].price, Decimal::new(899, 2));
    assert_eq!(products[1].price, Decimal::new(1000, 2));
}

#[tokio::test]
async fn best_sellers_ranks_sold_products_first_and_keeps_the_rest() {
    let state = test_state(MockProcessor::paid()).await;

    // sell product 2 so it outranks product 1
    state
        .order_service()
        .create_order(draft(1, 4495), vec![line_item(2, 5, 899)])
        .await
        .unwrap();

    let repo = ProductRepository::new(state.db.pool.clone());
    let products = repo
        .find_by_establishment(1, ProductSort::BestSellers)
        .await
        .unwrap();
    assert_eq!(products.len(), 2, "unsold products must not disappear");
    assert_eq!(products[0].id, 2);
    assert_eq!(products[1].id, 1);
}

#[tokio::test]
async fn search_is_case_insensitive_and_covers_category_names() {
    let state = test_state(MockProcessor::paid()).await;
    let repo = ProductRepository::new(state.db.pool.clone());

    // product name, different case
    let by_name = repo.search(Some(1), "ARROZ").await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Arroz Tipo 1");

    // category name matches both products in the category
    let by_category = repo.search(Some(1), "grãos").await.unwrap();
    assert_eq!(by_category.len(), 2);

    // description
    let by_description = repo.search(Some(1), "5kg bag").await.unwrap();
    assert_eq!(by_description.len(), 1);

    let nothing = repo.search(Some(1), "picanha").await.unwrap();
    assert!(nothing.is_empty());
}

#[tokio::test]
async fn global_search_ignores_establishment_scope() {
    let state = test_state(MockProcessor::paid()).await;
    let repo = ProductRepository::new(state.db.pool.clone());
    let products = repo.search(None, "feijão").await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 2);
}

#[tokio::test]
async fn featured_listing_only_returns_featured_products() {
    let state = test_state(MockProcessor::paid()).await;
    let repo = ProductRepository::new(state.db.pool.clone());
    let featured = repo.find_featured(1).await.unwrap();
    assert_eq!(featured.len(), 1);
    assert!(featured[0].is_featured);
    assert_eq!(featured[0].id, 1);
}

#[tokio::test]
async fn categories_come_with_their_products() {
    let state = test_state(MockProcessor::paid()).await;
    let repo = CategoryRepository::new(state.db.pool.clone());
    let listing = repo.find_with_products(1).await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].category.name, "Grãos");
    assert_eq!(listing[0].products.len(), 2);
}

#[tokio::test]
async fn inactive_products_are_hidden_from_listings() {
    let state = test_state(MockProcessor::paid()).await;
    sqlx::query("UPDATE products SET is_active = 0 WHERE id = 2")
        .execute(&state.db.pool)
        .await
        .unwrap();

    let repo = ProductRepository::new(state.db.pool.clone());
    let products = repo
        .find_by_establishment(1, ProductSort::Newest)
        .await
        .unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 1);
}
