//! Data for the shop demo.

pub use folio_shop::catalog::seed_catalog;

use folio_shop::prelude::*;

/// Rebuild the cart from the `cart` query parameter (`id:qty,id:qty`).
///
/// The cart is never stored server-side; every request re-derives it from
/// the URL, which is as close as a streamed page gets to component-local
/// state. Unknown product ids and malformed pairs are skipped and reported.
pub fn parse_cart_param(catalog: &Catalog, param: &str) -> (Cart, Vec<ShopError>) {
    let mut cart = Cart::new();
    let mut errors = Vec::new();

    for pair in param.split(',').filter(|p| !p.is_empty()) {
        let Some((id_str, qty_str)) = pair.split_once(':') else {
            errors.push(ShopError::MalformedCartEntry(pair.to_string()));
            continue;
        };

        let (Ok(id), Ok(qty)) = (id_str.parse::<u32>(), qty_str.parse::<u32>()) else {
            errors.push(ShopError::MalformedCartEntry(pair.to_string()));
            continue;
        };

        match catalog.find(id) {
            Ok(product) => {
                if qty > 0 {
                    cart.add(product);
                    cart.set_quantity(id, qty);
                }
            }
            Err(e) => errors.push(e),
        }
    }

    (cart, errors)
}

/// Serialize a cart back into the `cart` query parameter.
pub fn format_cart_param(cart: &Cart) -> String {
    cart.lines()
        .iter()
        .map(|l| format!("{}:{}", l.product.id, l.quantity))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_param_round_trip() {
        let catalog = seed_catalog();
        let (cart, errors) = parse_cart_param(&catalog, "1:2,3:1");

        assert!(errors.is_empty());
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.get(1).unwrap().quantity, 2);
        assert_eq!(format_cart_param(&cart), "1:2,3:1");
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let catalog = seed_catalog();
        let (cart, errors) = parse_cart_param(&catalog, "1:1,999:4");

        assert_eq!(cart.line_count(), 1);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_zero_quantity_is_not_a_line() {
        let catalog = seed_catalog();
        let (cart, errors) = parse_cart_param(&catalog, "1:0");

        assert!(cart.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_malformed_pairs_reported() {
        let catalog = seed_catalog();
        let (cart, errors) = parse_cart_param(&catalog, "nonsense,2:two");

        assert!(cart.is_empty());
        assert_eq!(errors.len(), 2);
    }
}
