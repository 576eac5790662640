//! Listing helpers: search filtering and pagination of product lists.

use serde::{Serialize, Serializer};

use crate::catalog::Product;

/// Numbered links shown before the control collapses into ellipses.
const MAX_PAGE_LINKS: usize = 5;

// == Search ==
/// Keeps products whose brand or model contains `query`, ignoring case.
///
/// A blank query keeps everything.
pub fn filter_products(products: Vec<Product>, query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products;
    }

    products
        .into_iter()
        .filter(|p| {
            p.brand.to_lowercase().contains(&needle) || p.model.to_lowercase().contains(&needle)
        })
        .collect()
}

// == Page ==
/// One page of a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually served
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    /// Always at least 1
    pub total_pages: usize,
    /// 1-based index of the first item shown, 0 when the list is empty
    pub start_item: usize,
    /// 1-based index of the last item shown
    pub end_item: usize,
}

/// Slices `items` into page `page` of `per_page` items.
///
/// Out-of-range pages are clamped to the nearest valid page and a zero
/// `per_page` is treated as 1.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let offset = (page - 1) * per_page;
    let items: Vec<T> = items.into_iter().skip(offset).take(per_page).collect();

    let (start_item, end_item) = if total_items == 0 {
        (0, 0)
    } else {
        (offset + 1, (page * per_page).min(total_items))
    };

    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
        start_item,
        end_item,
    }
}

// == Page Links ==
/// Entry in a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Number(usize),
    Ellipsis,
}

impl Serialize for PageLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLink::Number(n) => serializer.serialize_u64(*n as u64),
            PageLink::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Page links to render around `current` out of `total` pages.
///
/// Small lists show every page. Longer ones always show the first and last
/// page plus a three-page window around `current`, with ellipses for gaps.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageLink> {
    if total <= MAX_PAGE_LINKS {
        return (1..=total).map(PageLink::Number).collect();
    }

    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total - 1);

    if current <= 3 {
        end = 4;
    } else if current >= total - 2 {
        start = total - 3;
    }

    let mut links = vec![PageLink::Number(1)];
    if start > 2 {
        links.push(PageLink::Ellipsis);
    }
    links.extend((start..=end).map(PageLink::Number));
    if end < total - 1 {
        links.push(PageLink::Ellipsis);
    }
    links.push(PageLink::Number(total));
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use super::PageLink::{Ellipsis, Number};

    fn product(id: &str, brand: &str, model: &str) -> Product {
        serde_json::from_value(json!({"id": id, "brand": brand, "model": model})).unwrap()
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Apple", "iPhone 15"),
            product("2", "Samsung", "Galaxy S24"),
            product("3", "Acer", "Iconia Talk S"),
        ]
    }

    #[test]
    fn test_filter_matches_brand_or_model_case_insensitively() {
        let ids: Vec<String> = filter_products(catalog(), "GALAXY")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["2"]);

        let ids: Vec<String> = filter_products(catalog(), "ac")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        assert_eq!(filter_products(catalog(), "   ").len(), 3);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_products(catalog(), "nokia").is_empty());
    }

    #[test]
    fn test_paginate_middle_page() {
        let page = paginate((1..=25).collect::<Vec<_>>(), 2, 10);

        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
        assert_eq!((page.start_item, page.end_item), (11, 20));
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let page = paginate((1..=25).collect::<Vec<_>>(), 3, 10);

        assert_eq!(page.items, (21..=25).collect::<Vec<_>>());
        assert_eq!((page.start_item, page.end_item), (21, 25));
    }

    #[test]
    fn test_paginate_clamps_out_of_range_pages() {
        let page = paginate((1..=5).collect::<Vec<_>>(), 9, 2);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, vec![5]);

        let page = paginate((1..=5).collect::<Vec<_>>(), 0, 2);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_paginate_empty_list() {
        let page = paginate(Vec::<u8>::new(), 1, 10);

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!((page.start_item, page.end_item), (0, 0));
    }

    #[test]
    fn test_page_numbers_small_total() {
        assert_eq!(page_numbers(2, 3), vec![Number(1), Number(2), Number(3)]);
        assert!(page_numbers(1, 0).is_empty());
    }

    #[test]
    fn test_page_numbers_near_start() {
        assert_eq!(
            page_numbers(1, 10),
            vec![Number(1), Number(2), Number(3), Number(4), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn test_page_numbers_in_middle() {
        assert_eq!(
            page_numbers(5, 10),
            vec![
                Number(1),
                Ellipsis,
                Number(4),
                Number(5),
                Number(6),
                Ellipsis,
                Number(10)
            ]
        );
    }

    #[test]
    fn test_page_numbers_near_end() {
        assert_eq!(
            page_numbers(9, 10),
            vec![Number(1), Ellipsis, Number(7), Number(8), Number(9), Number(10)]
        );
    }

    #[test]
    fn test_page_link_serialization() {
        let json = serde_json::to_value(page_numbers(5, 10)).unwrap();
        assert_eq!(json, json!([1, "...", 4, 5, 6, "...", 10]));
    }
}
