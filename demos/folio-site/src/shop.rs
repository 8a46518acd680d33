//! The reactive shop demo page.
//!
//! An in-page port of the streamed shop workload: the same `folio-shop`
//! domain types, but held in signals and re-derived on every change instead
//! of being carried in the URL. The cart lives exactly as long as this page
//! is mounted; navigating away discards it.

use leptos::prelude::*;

use folio_shop::prelude::*;

/// The `/demos/shop` page.
#[component]
pub fn ShopDemoPage() -> impl IntoView {
    let catalog = StoredValue::new(seed_catalog());
    let state = RwSignal::new(FilterState::default());
    let cart = RwSignal::new(Cart::new());

    // The derived view: filter, stable-sort, page. Recomputed whenever the
    // filter state changes; never cached across changes.
    let catalog_view = Memo::new(move |_| {
        let state = state.get();
        catalog.with_value(|c| CatalogView::derive(c.all(), &state))
    });

    view! {
        <section class="shop-demo">
            <header class="page-head">
                <h1>"Shop"</h1>
                <p class="page-sub">
                    "A catalog, cart, and currency demo. Everything below is local "
                    "state - reload the page and the cart is gone."
                </p>
            </header>
            <FilterBar state=state/>
            <div class="shop-layout">
                <div>
                    <CatalogGrid state=state catalog_view=catalog_view cart=cart/>
                    <Pager state=state catalog_view=catalog_view/>
                </div>
                <CartPanel state=state cart=cart/>
            </div>
        </section>
    }
}

/// Category chips plus the sort and currency selectors.
#[component]
fn FilterBar(state: RwSignal<FilterState>) -> impl IntoView {
    let chips = std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
        .map(|filter| {
            let label = match filter {
                CategoryFilter::All => "All",
                CategoryFilter::Only(cat) => cat.display_name(),
            };
            view! {
                <button
                    class=move || {
                        if state.get().category == filter { "chip chip-active" } else { "chip" }
                    }
                    on:click=move |_| state.update(|s| s.set_category(filter))
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="shop-filters">
            <div class="filter-categories">{chips}</div>
            <div class="filter-row">
                <label>
                    <span class="filter-label">"Sort"</span>
                    <select on:change=move |ev| {
                        if let Ok(sort) = SortKey::from_str(&event_target_value(&ev)) {
                            state.update(|s| s.set_sort(sort));
                        }
                    }>
                        {SortKey::ALL
                            .into_iter()
                            .map(|sort| {
                                view! {
                                    <option
                                        value=sort.as_str()
                                        selected=move || state.get().sort == sort
                                    >
                                        {sort.display_name()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label>
                    <span class="filter-label">"Currency"</span>
                    <select on:change=move |ev| {
                        if let Ok(currency) = Currency::from_code(&event_target_value(&ev)) {
                            state.update(|s| s.set_currency(currency));
                        }
                    }>
                        {Currency::ALL
                            .into_iter()
                            .map(|currency| {
                                view! {
                                    <option
                                        value=currency.code()
                                        selected=move || state.get().currency == currency
                                    >
                                        {currency.code()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>
        </div>
    }
}

/// The product grid for the current page of the derived view.
#[component]
fn CatalogGrid(
    state: RwSignal<FilterState>,
    catalog_view: Memo<CatalogView>,
    cart: RwSignal<Cart>,
) -> impl IntoView {
    view! {
        <p class="catalog-range">
            {move || {
                let p = catalog_view.get().pagination;
                format!("Showing {}-{} of {}", p.start_item(), p.end_item(), p.total)
            }}
        </p>
        <div class="catalog-grid">
            {move || {
                catalog_view
                    .get()
                    .items
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product state=state cart=cart/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn ProductCard(
    product: Product,
    state: RwSignal<FilterState>,
    cart: RwSignal<Cart>,
) -> impl IntoView {
    let price = product.price;
    let original_price = product.original_price.filter(|_| product.is_on_sale());
    let available = product.is_available();
    let add_target = product.clone();

    view! {
        <div class="product-card">
            <div class="card-badges">
                {product.is_new.then(|| view! { <span class="badge badge-new">"NEW"</span> })}
                {product
                    .is_bestseller
                    .then(|| view! { <span class="badge badge-bestseller">"BESTSELLER"</span> })}
            </div>
            <h3>{product.name.clone()}</h3>
            <p class="card-description">{product.description.clone()}</p>
            <p class="card-rating">
                {format!("\u{2605} {:.1} ", product.rating)}
                <span class="review-count">{format!("({})", product.reviews)}</span>
            </p>
            <p class="card-price">
                {move || state.get().currency.display(price)}
                " "
                {original_price
                    .map(|op| {
                        view! {
                            <span class="price-original">
                                {move || state.get().currency.display(op)}
                            </span>
                        }
                    })}
            </p>
            <p class=if available { "stock" } else { "stock stock-out" }>
                {if available {
                    format!("{} in stock", product.in_stock)
                } else {
                    "Out of stock".to_string()
                }}
            </p>
            <button
                class="btn-add"
                disabled=!available
                on:click=move |_| cart.update(|c| c.add(&add_target))
            >
                "Add to Cart"
            </button>
        </div>
    }
}

/// Previous/next plus a page-number strip. Next and previous clamp into
/// range; out-of-range numbers can't be produced from here.
#[component]
fn Pager(state: RwSignal<FilterState>, catalog_view: Memo<CatalogView>) -> impl IntoView {
    view! {
        <nav class="shop-pager">
            <button
                class="pager-link"
                disabled=move || catalog_view.get().pagination.is_first()
                on:click=move |_| {
                    let target = catalog_view.get().pagination.prev_page();
                    state.update(|s| s.set_page(target));
                }
            >
                "\u{2190} Previous"
            </button>
            {move || {
                let p = catalog_view.get().pagination;
                p.page_numbers(5)
                    .into_iter()
                    .map(|n| {
                        view! {
                            <button
                                class=move || {
                                    if catalog_view.get().pagination.page == n {
                                        "pager-num current"
                                    } else {
                                        "pager-num"
                                    }
                                }
                                on:click=move |_| state.update(|s| s.set_page(n))
                            >
                                {n}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="pager-link"
                disabled=move || catalog_view.get().pagination.is_last()
                on:click=move |_| {
                    let target = catalog_view.get().pagination.next_page();
                    state.update(|s| s.set_page(target));
                }
            >
                "Next \u{2192}"
            </button>
        </nav>
    }
}

/// The cart panel: lines with quantity steppers and the pricing breakdown.
#[component]
fn CartPanel(state: RwSignal<FilterState>, cart: RwSignal<Cart>) -> impl IntoView {
    view! {
        <aside class="shop-cart">
            <h3>
                "Cart "
                <span class="cart-count">
                    {move || format!("({} items)", cart.get().item_count())}
                </span>
            </h3>
            {move || {
                let current = cart.get();
                if current.is_empty() {
                    view! { <p class="cart-empty">"Nothing here yet."</p> }.into_any()
                } else {
                    let lines = current
                        .lines()
                        .iter()
                        .cloned()
                        .map(|line| {
                            let id = line.product.id;
                            let qty = line.quantity;
                            let line_total = line.line_total();
                            view! {
                                <div class="cart-line">
                                    <span class="line-name">{line.product.name.clone()}</span>
                                    <button
                                        class="qty-btn"
                                        on:click=move |_| {
                                            cart.update(|c| {
                                                c.set_quantity(id, qty.saturating_sub(1));
                                            })
                                        }
                                    >
                                        "\u{2212}"
                                    </button>
                                    <span>{qty}</span>
                                    <button
                                        class="qty-btn"
                                        on:click=move |_| {
                                            cart.update(|c| {
                                                c.set_quantity(id, qty + 1);
                                            })
                                        }
                                    >
                                        "+"
                                    </button>
                                    <span class="line-total">
                                        {move || state.get().currency.display(line_total)}
                                    </span>
                                    <button
                                        class="line-remove"
                                        on:click=move |_| {
                                            cart.update(|c| {
                                                c.remove(id);
                                            })
                                        }
                                    >
                                        "remove"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>();

                    let pricing = current.pricing();
                    view! {
                        <div>
                            {lines}
                            <dl class="cart-totals">
                                <dt>"Subtotal"</dt>
                                <dd>{move || state.get().currency.display(pricing.subtotal)}</dd>
                                <dt>"GST (18%)"</dt>
                                <dd>{move || state.get().currency.display(pricing.gst)}</dd>
                                <dt>"Shipping"</dt>
                                <dd class="free">"Free"</dd>
                                <dt class="grand">"Total"</dt>
                                <dd class="grand">
                                    {move || state.get().currency.display(pricing.grand_total)}
                                </dd>
                            </dl>
                        </div>
                    }
                    .into_any()
                }
            }}
        </aside>
    }
}
