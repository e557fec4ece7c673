use crate::domain::model::{CategoryPhotos, Photo};

/// Concatenate every category list and sort descending by likes. The sort is
/// stable, so photos with equal likes keep their concatenation order.
pub fn aggregate_all(categories: &[CategoryPhotos]) -> Vec<Photo> {
    let mut all: Vec<Photo> = categories
        .iter()
        .flat_map(|category| category.photos.iter().cloned())
        .collect();

    all.sort_by(|a, b| b.likes.cmp(&a.likes));
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProviderKind;

    fn photo(provider: ProviderKind, id: &str, likes: u32) -> Photo {
        Photo::new(provider, id, format!("https://img.test/{}", id), likes)
    }

    fn category(name: &str, photos: Vec<Photo>) -> CategoryPhotos {
        CategoryPhotos {
            name: name.to_string(),
            display: name.to_string(),
            photos,
        }
    }

    #[test]
    fn aggregates_two_categories_in_likes_order() {
        let categories = vec![
            category(
                "oceans",
                vec![
                    photo(ProviderKind::Unsplash, "a", 5),
                    photo(ProviderKind::Unsplash, "b", 1),
                ],
            ),
            category("forests", vec![photo(ProviderKind::Unsplash, "c", 3)]),
        ];

        let all = aggregate_all(&categories);

        let likes: Vec<u32> = all.iter().map(|p| p.likes).collect();
        assert_eq!(likes, vec![5, 3, 1]);
    }

    #[test]
    fn length_equals_sum_of_category_lengths() {
        let categories = vec![
            category("a", vec![photo(ProviderKind::Unsplash, "a1", 2)]),
            category(
                "b",
                vec![
                    photo(ProviderKind::Pinterest, "b1", 9),
                    photo(ProviderKind::Pinterest, "b2", 4),
                ],
            ),
            category("c", vec![]),
            category("d", vec![photo(ProviderKind::Unsplash, "d1", 4)]),
        ];

        let all = aggregate_all(&categories);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn handles_duplicate_and_boundary_likes_across_four_lists() {
        let categories = vec![
            category(
                "one",
                vec![
                    photo(ProviderKind::Unsplash, "u1", 0),
                    photo(ProviderKind::Unsplash, "u2", 7),
                ],
            ),
            category(
                "two",
                vec![
                    photo(ProviderKind::Pinterest, "p1", 7),
                    photo(ProviderKind::Pinterest, "p2", u32::MAX),
                ],
            ),
            category("three", vec![photo(ProviderKind::Unsplash, "u3", 0)]),
            category("four", vec![photo(ProviderKind::Pinterest, "p3", 7)]),
        ];

        let all = aggregate_all(&categories);

        let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "pinterest:p2",
                "unsplash:u2",
                "pinterest:p1",
                "pinterest:p3",
                "unsplash:u1",
                "unsplash:u3",
            ]
        );

        for pair in all.windows(2) {
            assert!(pair[0].likes >= pair[1].likes);
        }
    }

    #[test]
    fn ties_keep_concatenation_order() {
        let categories = vec![
            category("x", vec![photo(ProviderKind::Unsplash, "first", 3)]),
            category("y", vec![photo(ProviderKind::Pinterest, "second", 3)]),
            category("z", vec![photo(ProviderKind::Unsplash, "third", 3)]),
        ];

        let all = aggregate_all(&categories);

        let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["unsplash:first", "pinterest:second", "unsplash:third"]);
    }

    #[test]
    fn provider_namespacing_keeps_ids_unique_across_providers() {
        let categories = vec![
            category("x", vec![photo(ProviderKind::Unsplash, "42", 1)]),
            category("y", vec![photo(ProviderKind::Pinterest, "42", 2)]),
        ];

        let all = aggregate_all(&categories);

        assert_eq!(all.len(), 2);
        assert_ne!(all[0].id, all[1].id);
    }

    #[test]
    fn empty_input_aggregates_to_empty() {
        assert!(aggregate_all(&[]).is_empty());
    }
}
