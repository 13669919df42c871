//! Perturbation operators for city tours.
//!
//! Both operators mutate the tour in place and return the length of the
//! mutated tour, recomputed from scratch. Indices wrap around the tour, and
//! tours of zero or one city are left untouched.

use crate::instance::{compute_total_distance, Location};

/// Swap the city at `index` with the city after it, wrapping from the last city to the first.
pub fn swap_adjacent_cities(tour: &mut [Location], index: usize) -> f64 {
    let n = tour.len();
    if n <= 1 {
        return compute_total_distance(tour);
    }

    let index = index % n;
    let to_swap = (index + 1) % n;
    tour.swap(index, to_swap);
    compute_total_distance(tour)
}

/// Swap the cities at `index1` and `index2`.
///
/// When both indices are equal the city is swapped with its predecessor instead,
/// so every call on a tour of two or more cities is a real transposition.
pub fn swap_cities(tour: &mut [Location], index1: usize, index2: usize) -> f64 {
    let n = tour.len();
    if n <= 1 {
        return compute_total_distance(tour);
    }

    let index1 = index1 % n;
    let mut index2 = index2 % n;
    if index1 == index2 {
        index2 = (index1 + n - 1) % n;
    }
    tour.swap(index1, index2);
    compute_total_distance(tour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::distance;
    use crate::instance::tests::small_road_map;

    fn names(tour: &[Location]) -> Vec<&str> {
        tour.iter().map(|l| l.name.as_str()).collect()
    }

    fn leg(a: &Location, b: &Location) -> f64 {
        distance(a.latitude, a.longitude, b.latitude, b.longitude)
    }

    #[test]
    fn test_swap_adjacent_first_pair() {
        let cities = small_road_map();
        let (mont, jun, phx, lr, sac) = (&cities[0], &cities[1], &cities[2], &cities[3], &cities[4]);
        let expected_cost = leg(jun, mont) + leg(mont, phx) + leg(phx, lr) + leg(lr, sac) + leg(sac, jun);

        let mut tour = cities.clone();
        let cost = swap_adjacent_cities(&mut tour, 0);

        assert_eq!(names(&tour), vec!["Juneau", "Montgomery", "Phoenix", "Little Rock", "Sacramento"]);
        assert_eq!(cost, expected_cost);
    }

    #[test]
    fn test_swap_adjacent_wraps_last_to_first() {
        let cities = small_road_map();
        let mut tour = cities.clone();
        let cost = swap_adjacent_cities(&mut tour, 4);

        assert_eq!(names(&tour), vec!["Sacramento", "Juneau", "Phoenix", "Little Rock", "Montgomery"]);
        assert_eq!(cost, compute_total_distance(&tour));
        assert_ne!(names(&tour), names(&cities));
    }

    #[test]
    fn test_swap_adjacent_is_self_inverse() {
        let cities = small_road_map();
        let original_cost = compute_total_distance(&cities);

        for i in 0..cities.len() {
            let mut tour = cities.clone();
            swap_adjacent_cities(&mut tour, i);
            let cost = swap_adjacent_cities(&mut tour, i);

            assert_eq!(tour, cities);
            assert_eq!(cost, original_cost);
        }
    }

    #[test]
    fn test_swap_cities_normal() {
        let cities = small_road_map();
        let (mont, jun, phx, lr, sac) = (&cities[0], &cities[1], &cities[2], &cities[3], &cities[4]);
        let expected_cost = leg(mont, lr) + leg(lr, phx) + leg(phx, jun) + leg(jun, sac) + leg(sac, mont);

        let mut tour = cities.clone();
        let cost = swap_cities(&mut tour, 1, 3);

        assert_eq!(names(&tour), vec!["Montgomery", "Little Rock", "Phoenix", "Juneau", "Sacramento"]);
        assert_eq!(cost, expected_cost);
    }

    #[test]
    fn test_swap_cities_same_index_uses_predecessor() {
        let cities = small_road_map();
        let (mont, jun, phx, lr, sac) = (&cities[0], &cities[1], &cities[2], &cities[3], &cities[4]);
        let expected_cost = leg(mont, phx) + leg(phx, jun) + leg(jun, lr) + leg(lr, sac) + leg(sac, mont);

        let mut tour = cities.clone();
        let cost = swap_cities(&mut tour, 2, 2);

        assert_eq!(names(&tour), vec!["Montgomery", "Phoenix", "Juneau", "Little Rock", "Sacramento"]);
        assert_eq!(cost, expected_cost);
    }

    #[test]
    fn test_swap_cities_same_index_zero_wraps() {
        let mut tour = small_road_map();
        swap_cities(&mut tour, 0, 0);
        assert_eq!(names(&tour), vec!["Sacramento", "Juneau", "Phoenix", "Little Rock", "Montgomery"]);
    }

    #[test]
    fn test_same_index_never_a_no_op() {
        let cities = small_road_map();
        for n in 2..=cities.len() {
            for i in 0..n {
                let mut tour = cities[..n].to_vec();
                swap_cities(&mut tour, i, i);
                assert_ne!(tour, cities[..n].to_vec());
            }
        }
    }

    #[test]
    fn test_degenerate_tours() {
        let mut empty: Vec<Location> = Vec::new();
        assert_eq!(swap_adjacent_cities(&mut empty, 0), 0.0);
        assert_eq!(swap_cities(&mut empty, 3, 3), 0.0);

        let mut single = small_road_map()[..1].to_vec();
        assert_eq!(swap_adjacent_cities(&mut single, 0), 0.0);
        assert_eq!(swap_cities(&mut single, 0, 0), 0.0);
        assert_eq!(single[0].name, "Montgomery");
    }

    #[test]
    fn test_out_of_range_indices_wrap() {
        let mut wrapped = small_road_map();
        let mut direct = small_road_map();
        swap_cities(&mut wrapped, 6, 8);
        swap_cities(&mut direct, 1, 3);
        assert_eq!(wrapped, direct);
    }
}
