//! Integration tests for the helper layer.
//!
//! These exercise the crate surface the way a repository layer would:
//! binding comparisons onto a builder, combining nested condition lists,
//! embedding subqueries, and windowing results.

use pretty_assertions::assert_eq;

use dqlkit::prelude::*;

#[test]
fn test_filtered_query_end_to_end() {
    let mut qb = DqlBuilder::with_dql("SELECT u FROM User u");

    let active = eq(&mut qb, "u.active", true);
    let adult = gte(&mut qb, "u.age", 18);
    let named = like(&mut qb, "u.name", "A%");
    require_all(
        &mut qb,
        [Cond::from(active), Cond::from(adult), Cond::from(named)],
    );
    paginate(&mut qb, 20, 40);

    assert_eq!(qb.parameters().len(), 3);
    assert_eq!(qb.first_result(), Some(40));
    assert_eq!(qb.max_results(), Some(20));

    let clause = qb.where_clause().unwrap().to_string();
    assert_eq!(clause.matches(" AND ").count(), 2);
    assert!(clause.contains("u.age >= :"));
    assert!(clause.contains("u.name LIKE :"));
}

#[test]
fn test_flattening_is_associative() {
    let nested = all_of([
        Cond::from(vec![Cond::from("a = 1"), Cond::from("b = 2")]),
        Cond::from(vec![Cond::from("c = 3")]),
    ]);
    let flat = all_of([Cond::from("a = 1"), Cond::from("b = 2"), Cond::from("c = 3")]);
    assert_eq!(nested, flat);
    assert_eq!(nested.to_string(), "a = 1 AND b = 2 AND c = 3");
}

#[test]
fn test_none_entries_never_survive_normalization() {
    let flat = normalize([
        Cond::None,
        Cond::from(vec![
            Cond::None,
            Cond::from(vec![Cond::from("x = 1"), Cond::None]),
        ]),
        Cond::from("y = 2"),
    ]);
    assert_eq!(flat.len(), 2);
    assert_eq!(flat[0].to_string(), "x = 1");
    assert_eq!(flat[1].to_string(), "y = 2");
}

#[test]
fn test_global_names_distinct_across_10k_generations() {
    let names = ParamNames::global();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..10_000 {
        assert!(seen.insert(names.next("u.id")));
    }
}

#[test]
fn test_between_is_equivalent_to_gte_and_lte() {
    let mut via_between = DqlBuilder::new();
    let range = between(&mut via_between, "o.total", 10i64, 99i64);

    let mut via_pair = DqlBuilder::new();
    let pair = all_of([
        Cond::from(gte(&mut via_pair, "o.total", 10i64)),
        Cond::from(lte(&mut via_pair, "o.total", 99i64)),
    ]);

    // Both forms bind the same bounds, in the same order.
    let bounds = |qb: &DqlBuilder| -> Vec<ParamValue> {
        qb.parameters().into_iter().map(|p| p.value).collect()
    };
    assert_eq!(bounds(&via_between), bounds(&via_pair));

    let between_params: Vec<String> =
        via_between.parameters().into_iter().map(|p| p.name).collect();
    assert_eq!(
        range.to_string(),
        format!("o.total BETWEEN :{} AND :{}", between_params[0], between_params[1])
    );
    assert!(pair.to_string().contains("o.total >= :"));
    assert!(pair.to_string().contains("o.total <= :"));
}

#[test]
fn test_seconds_from_a_to_b_is_negated_a_minus_b() {
    // TIMESTAMPDIFF(unit, x, y) evaluates to y - x, so swapping the
    // arguments negates the result.
    let fwd = seconds_from_a_to_b("t.start", "t.end");
    let rev = seconds_a_minus_b("t.start", "t.end");
    assert_eq!(fwd.to_string(), "TIMESTAMPDIFF(SECOND, t.start, t.end)");
    assert_eq!(rev.to_string(), "TIMESTAMPDIFF(SECOND, t.end, t.start)");
}

#[test]
fn test_subquery_parameters_follow_the_exists_wrapper() {
    let mut sub = DqlBuilder::with_dql("SELECT o FROM Order o WHERE o.total > :floor");
    sub.set_parameter(Parameter::new("floor", 100i64).with_type(ParamType::Integer));

    let mut qb = DqlBuilder::with_dql("SELECT u FROM User u");
    let has_order = exists(&mut qb, &sub, true);
    require_all(&mut qb, [Cond::from(has_order)]);

    let params = qb.parameters();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].name, "floor");
    assert_eq!(params[0].ty, Some(ParamType::Integer));
    assert_eq!(
        qb.where_clause().unwrap().to_string(),
        "EXISTS(SELECT o FROM Order o WHERE o.total > :floor)"
    );
}

#[test]
fn test_update_assignments_accumulate() {
    let mut qb = DqlBuilder::with_dql("UPDATE User u");
    set(&mut qb, "u.name", "Bob");
    set(&mut qb, "u.active", false);

    assert_eq!(qb.set_clauses().len(), 2);
    assert_eq!(qb.parameters().len(), 2);
}

#[test]
fn test_pagination_bounds() {
    let mut qb = DqlBuilder::new();
    paginate(&mut qb, 0, 10);
    assert_eq!(qb.first_result(), None);
    assert_eq!(qb.max_results(), None);

    paginate(&mut qb, -1, 10);
    assert_eq!(qb.max_results(), None);

    paginate(&mut qb, 5, 10);
    assert_eq!(qb.first_result(), Some(10));
    assert_eq!(qb.max_results(), Some(5));
}

#[test]
fn test_raw_fragments_and_expressions_mix() {
    let mut qb = DqlBuilder::new();
    let typed_cond = eq(&mut qb, "u.role", "admin");
    let combined = require_any(
        &mut qb,
        [
            Cond::from(typed_cond),
            Cond::from("u.superuser = TRUE"),
            Cond::from(Some(Expr::is_null("u.banned_at"))),
            Cond::from(None::<Expr>),
        ],
    );

    assert_eq!(combined.count(), 3);
    let clause = qb.where_clause().unwrap().to_string();
    assert!(clause.contains("u.superuser = TRUE"));
    assert!(clause.contains("u.banned_at IS NULL"));
}

#[test]
fn test_vendor_predicates_render_fixed_forms() {
    assert_eq!(
        contains("u.tags", ":tags").to_string(),
        "CONTAINS(u.tags, :tags) = TRUE"
    );
    assert_eq!(
        is_not_contained_by("u.region", ":area").to_string(),
        "IS_CONTAINED_BY(u.region, :area) = FALSE"
    );
    assert_eq!(
        earth_distance(55.75396, 37.620393, "b.lat", "b.lon").to_string(),
        "EARTH_DISTANCE(LL_TO_EARTH(55.753960, 37.620393), LL_TO_EARTH(b.lat, b.lon))"
    );
}
