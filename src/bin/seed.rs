use storefront_api::db::{DbPool, create_orm_conn, create_pool, run_migrations};

const DEPARTMENTS: &[(&str, &str)] = &[
    ("Regional", "Proud of your country? Wear a T-shirt with a national symbol stamp!"),
    ("Nature", "Find beautiful T-shirts with animals and flowers in our Nature department!"),
    ("Seasonal", "Each time of the year has a special flavor. Our seasonal T-shirts express traditional symbols using unique postal stamp pictures."),
];

// (department, category, description)
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("Regional", "French", "The French have always had an eye for beauty."),
    ("Regional", "Italian", "The full and resplendent treasure chest of art, literature, music, and science."),
    ("Regional", "Irish", "It was Churchill who remarked that he thought the Irish most curious."),
    ("Nature", "Animal", "Our ever-growing selection of beautiful animal T-shirts."),
    ("Nature", "Flower", "These unique and beautiful flower T-shirts are just the item for the gardener."),
    ("Seasonal", "Christmas", "Because this is a unique Christmas T-shirt that you'll only wear a few times a year."),
    ("Seasonal", "Valentine's", "For the more timid, all you have to do is wear your heartfelt message."),
];

// (name, description, price, discounted_price, thumbnail, categories)
const PRODUCTS: &[(&str, &str, i64, i64, &str, &[&str])] = &[
    ("Arc d'Triomphe", "This beautiful and iconic T-shirt will no doubt lead you to your own triumph.", 1499, 0, "arc-d-triomphe-thumbnail.gif", &["French"]),
    ("Chartres Cathedral", "\"The Fur Merchants\". Not all the beautiful stained glass in the great cathedrals depicts saints and angels!", 1695, 1595, "chartres-cathedral-thumbnail.gif", &["French"]),
    ("Coat of Arms", "There's good reason why the ship plays a prominent part on this shield!", 1450, 0, "coat-of-arms-thumbnail.gif", &["French", "Christmas"]),
    ("Italia", "The War had just ended when this stamp was designed, and even so, there was enough optimism to show the destroyed oak tree sprouting again from its stump!", 2200, 1899, "italia-thumbnail.gif", &["Italian"]),
    ("Irish Coat of Arms", "This was one of the first stamps of the new Irish Republic.", 1495, 0, "irish-coat-of-arms-thumbnail.gif", &["Irish"]),
    ("Afghan Flower", "This beautiful stamp was issued to commemorate National Teachers Day.", 1899, 1699, "afghan-flower-thumbnail.gif", &["Flower", "Valentine's"]),
    ("Alsace", "It was in this region of France that Gutenberg perfected his movable type.", 1650, 0, "alsace-thumbnail.gif", &["French"]),
    ("Gecko", "Geckos are native to tropical and subtropical regions.", 2195, 1950, "gecko-thumbnail.gif", &["Animal"]),
];

const ATTRIBUTES: &[(&str, &[&str])] = &[
    ("Size", &["S", "M", "L", "XL", "XXL"]),
    ("Color", &["White", "Black", "Red", "Orange", "Yellow", "Green", "Blue", "Indigo", "Purple"]),
];

const TAXES: &[(&str, f64)] = &[("Sales Tax at 8.5%", 8.5), ("No Tax", 0.0)];

// (region, [(shipping type, cost)])
const SHIPPING: &[(&str, &[(&str, i64)])] = &[
    ("Please Select", &[]),
    ("US / Canada", &[
        ("Next Day Delivery ($20)", 2000),
        ("3-4 Days ($10)", 1000),
        ("7 Days ($5)", 500),
    ]),
    ("Europe", &[
        ("By air (7 days, $25)", 2500),
        ("By sea (28 days, $10)", 1000),
    ]),
    ("Rest of World", &[
        ("By air (10 days, $35)", 3500),
        ("By sea (28 days, $30)", 3000),
    ]),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL")?;

    let pool = create_pool(&database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&create_orm_conn(&pool)).await?;

    seed_catalog(&pool).await?;
    seed_attributes(&pool).await?;
    seed_tax_and_shipping(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_catalog(pool: &DbPool) -> anyhow::Result<()> {
    for (name, description) in DEPARTMENTS {
        sqlx::query(
            "INSERT INTO department (name, description) VALUES ($1, $2) ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
    }

    for (department, name, description) in CATEGORIES {
        sqlx::query(
            r#"
            INSERT INTO category (department_id, name, description)
            SELECT department_id, $2, $3 FROM department WHERE name = $1
            ON CONFLICT (department_id, name) DO NOTHING
            "#,
        )
        .bind(department)
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
    }

    for (name, description, price, discounted_price, thumbnail, categories) in PRODUCTS {
        sqlx::query(
            r#"
            INSERT INTO product (name, description, price, discounted_price, thumbnail)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(discounted_price)
        .bind(thumbnail)
        .execute(pool)
        .await?;

        for category in categories.iter() {
            sqlx::query(
                r#"
                INSERT INTO product_category (product_id, category_id)
                SELECT p.product_id, c.category_id
                FROM product p, category c
                WHERE p.name = $1 AND c.name = $2
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(name)
            .bind(category)
            .execute(pool)
            .await?;
        }
    }

    println!("Seeded departments, categories and products");
    Ok(())
}

async fn seed_attributes(pool: &DbPool) -> anyhow::Result<()> {
    for (name, values) in ATTRIBUTES {
        sqlx::query("INSERT INTO attribute (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(pool)
            .await?;

        for value in values.iter() {
            sqlx::query(
                r#"
                INSERT INTO attribute_value (attribute_id, value)
                SELECT attribute_id, $2 FROM attribute WHERE name = $1
                ON CONFLICT (attribute_id, value) DO NOTHING
                "#,
            )
            .bind(name)
            .bind(value)
            .execute(pool)
            .await?;
        }
    }

    // Every product comes in every attribute value.
    sqlx::query(
        r#"
        INSERT INTO product_attribute (product_id, attribute_value_id)
        SELECT p.product_id, av.attribute_value_id
        FROM product p CROSS JOIN attribute_value av
        ON CONFLICT DO NOTHING
        "#,
    )
    .execute(pool)
    .await?;

    println!("Seeded attributes");
    Ok(())
}

async fn seed_tax_and_shipping(pool: &DbPool) -> anyhow::Result<()> {
    for (tax_type, percentage) in TAXES {
        sqlx::query(
            "INSERT INTO tax (tax_type, tax_percentage) VALUES ($1, $2) ON CONFLICT (tax_type) DO NOTHING",
        )
        .bind(tax_type)
        .bind(percentage)
        .execute(pool)
        .await?;
    }

    for (region, options) in SHIPPING {
        sqlx::query(
            "INSERT INTO shipping_region (shipping_region) VALUES ($1) ON CONFLICT (shipping_region) DO NOTHING",
        )
        .bind(region)
        .execute(pool)
        .await?;

        for (shipping_type, cost) in options.iter() {
            sqlx::query(
                r#"
                INSERT INTO shipping (shipping_type, shipping_cost, shipping_region_id)
                SELECT $2, $3, shipping_region_id FROM shipping_region WHERE shipping_region = $1
                ON CONFLICT (shipping_type) DO NOTHING
                "#,
            )
            .bind(region)
            .bind(shipping_type)
            .bind(cost)
            .execute(pool)
            .await?;
        }
    }

    println!("Seeded tax and shipping");
    Ok(())
}
