//! Read-time rating aggregation.
//!
//! Recomputed on every request from the rating rows of the movies being
//! served; nothing is cached or stored.

use std::collections::HashMap;

use kinoteka_db::entities::rating;

/// Per-movie rating aggregate for one caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatingStats {
    /// Arithmetic mean of all star values; `None` when the movie has no
    /// ratings.
    pub middle_star: Option<f64>,
    /// Number of ratings stored under the caller's client identity
    /// (used by clients as a boolean "have I rated this").
    pub rating_user: u64,
}

/// Aggregate rating rows by movie for the given caller identity.
///
/// Movies without any rating rows are absent from the result; callers
/// should fall back to [`RatingStats::default`] for them.
#[must_use]
pub fn aggregate(ratings: &[rating::Model], client_ip: &str) -> HashMap<String, RatingStats> {
    let mut sums: HashMap<String, (i64, u64, u64)> = HashMap::new();

    for rating in ratings {
        let entry = sums.entry(rating.movie_id.clone()).or_insert((0, 0, 0));
        entry.0 += i64::from(rating.star);
        entry.1 += 1;
        if rating.ip == client_ip {
            entry.2 += 1;
        }
    }

    sums.into_iter()
        .map(|(movie_id, (sum, count, user))| {
            let stats = RatingStats {
                // count > 0 here by construction, but keep the guard: the
                // mean of zero ratings must be absent, never a division.
                middle_star: (count > 0).then(|| sum as f64 / count as f64),
                rating_user: user,
            };
            (movie_id, stats)
        })
        .collect()
}
