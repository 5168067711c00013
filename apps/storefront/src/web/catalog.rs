use boutique_commerce::prelude::*;
use leptos::prelude::*;

#[component]
pub fn FilterSelect() -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();

    let options = CategoryFilter::options()
        .into_iter()
        .map(|option| {
            let label = option.label().to_string();
            view! { <option value=label.clone()>{label}</option> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="filter">
            <label for="category-filter">"Filter: "</label>
            <select
                id="category-filter"
                prop:value=move || shop.with(|s| s.filter().label().to_string())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    shop.update(|s| s.select_filter(&value));
                }
            >
                {options}
            </select>
        </div>
    }
}

#[component]
pub fn ProductGrid() -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();
    let visible = move || {
        shop.with(|s| s.visible_products().into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        {move || {
            let products = visible();
            if products.is_empty() {
                view! { <p>"Nothing in this category yet."</p> }.into_any()
            } else {
                view! {
                    <div class="products">
                        {products
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product /> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// One catalog entry with its "Add to Cart" button.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();
    let price = product.price_display();
    let id = product.id.clone();

    view! {
        <div class="product-card">
            <div class="product-image"></div>
            <h3>{product.title}</h3>
            <p class="price">{price}</p>
            <button
                class="btn"
                on:click=move |_| {
                    shop.update(|s| {
                        s.add_to_cart(&id);
                    });
                }
            >
                "Add to Cart"
            </button>
        </div>
    }
}
