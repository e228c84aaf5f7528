use listpage_core::{
	KeyFilter, LinkSettings, NoFilter, PaginationSettings, ParamKey, QueryKeys, Totals,
};
use listpage_render::{LinkRole, OutputMode, PageUrlTemplate, Pager, RequestUrl, generate_links};
use proptest::prelude::*;
use rstest::*;

#[fixture]
fn request() -> RequestUrl {
	RequestUrl::new(true, "shop.example.com", "/catalog/?category=tea&per_page=20&paged=2")
}

#[rstest]
fn test_viewing_text_round_trip() {
	let mut pager = Pager::from_url(
		"http://example.com/?per_page=5&paged=2",
		&PaginationSettings::default(),
		&NoFilter,
	)
	.unwrap();
	pager.setup_query(&Totals::from_count(12, 5));

	assert_eq!(pager.viewing_text().unwrap(), "Viewing 6 - 10 of a total of 12");
}

#[rstest]
fn test_every_link_keeps_per_page_and_other_params(request: RequestUrl) {
	let settings = PaginationSettings::default();
	let mut pager = Pager::from_url(&request.to_string(), &settings, &NoFilter).unwrap();
	pager.setup_query(&Totals::from_count(200, 20));

	let links = pager.links().unwrap();
	let current: Vec<_> = links.iter().filter(|l| l.is_current).collect();
	assert_eq!(current.len(), 1);
	assert_eq!(current[0].page, Some(2));

	for link in links.iter().filter(|l| l.role != LinkRole::Gap) {
		let url = url::Url::parse(link.url.as_deref().unwrap()).unwrap();
		let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
		assert!(pairs.contains(&("per_page".to_string(), "20".to_string())));
		assert!(pairs.contains(&("category".to_string(), "tea".to_string())));
		assert!(pairs.contains(&("paged".to_string(), link.page.unwrap().to_string())));
		assert_eq!(pairs.len(), 3);
		assert_eq!(url.path(), "/catalog/");
		assert_eq!(url.scheme(), "https");
	}
}

#[rstest]
fn test_two_listings_on_one_page_do_not_collide() {
	let url = "http://example.com/?paged=3&a_paged=2&a_per_page=4";
	let prefix_a = |_key: ParamKey, name: String| format!("a_{name}");

	let main = Pager::from_url(url, &PaginationSettings::default(), &NoFilter).unwrap();
	let side = Pager::from_url(url, &PaginationSettings::default(), &prefix_a).unwrap();

	assert_eq!(main.state().current_page(), 3);
	assert_eq!(main.state().per_page(), 10);
	assert_eq!(side.state().current_page(), 2);
	assert_eq!(side.state().per_page(), 4);

	// Each listing keeps the other's parameters in its links
	let side_url = side.template().url_for(1);
	assert!(side_url.contains("paged=3"));
	assert!(side_url.contains("a_paged=1"));
	assert_eq!(prefix_a.filter(ParamKey::Paged, "x".into()), "a_x");
}

#[rstest]
fn test_echo_mode_flag() {
	let settings = PaginationSettings::default();
	let mut pager = Pager::from_url("http://example.com/", &settings, &NoFilter).unwrap();
	pager.setup_query(&Totals::from_count(30, 10));

	let mut out = Vec::new();
	let returned = pager.paginate_links(OutputMode::from_flag("echo"), &mut out).unwrap();
	assert!(returned.is_none());
	let html = String::from_utf8(out).unwrap();
	assert_eq!(html.lines().count(), 4);
	assert!(html.starts_with(r#"<span aria-current="page" class="page-numbers current">1</span>"#));
}

#[rstest]
fn test_out_of_range_page_renders_without_current() {
	let settings = PaginationSettings::default();
	let mut pager = Pager::from_url("http://example.com/?paged=8", &settings, &NoFilter).unwrap();
	pager.setup_query(&Totals::from_count(25, 10));

	assert!(pager.state().is_out_of_range());
	assert_eq!(pager.viewing_text().unwrap(), "Viewing 71 - 25 of a total of 25");
	assert!(pager.links().unwrap().iter().all(|l| !l.is_current));
}

proptest! {
	#[test]
	fn prop_exactly_one_current_for_valid_pages(
		total_pages in 1usize..300,
		seed in 0usize..1000,
		show_all in any::<bool>(),
		end_size in 0usize..4,
		mid_size in 0usize..4,
	) {
		let current = seed % total_pages + 1;
		let template =
			PageUrlTemplate::new("http://example.com/", &QueryKeys::default(), 10).unwrap();
		let mut settings = LinkSettings::default().end_size(end_size).mid_size(mid_size);
		settings.show_all = show_all;

		let links = generate_links(current, total_pages, &template, &settings);
		let current_links: Vec<_> = links.iter().filter(|l| l.is_current).collect();

		prop_assert_eq!(current_links.len(), 1);
		prop_assert_eq!(current_links[0].page, Some(current));
		prop_assert_eq!(current_links[0].role, LinkRole::Current);

		// Gaps never touch each other
		for pair in links.windows(2) {
			prop_assert!(!(pair[0].role == LinkRole::Gap && pair[1].role == LinkRole::Gap));
		}

		// First and last pages are always reachable
		prop_assert!(links.iter().any(|l| l.page == Some(1) && l.is_numbered()));
		prop_assert!(links.iter().any(|l| l.page == Some(total_pages) && l.is_numbered()));
	}
}

#[rstest]
fn test_colliding_key_filter_keeps_pagination_navigable() {
	let same_name = |_key: ParamKey, _name: String| "p".to_string();
	let settings = PaginationSettings::default();
	let mut pager = Pager::from_url("http://example.com/?p=2", &settings, &same_name).unwrap();
	pager.setup_query(&Totals::from_count(50, 10));

	assert_eq!(pager.state().keys(), &QueryKeys::default());

	let next = url::Url::parse(&pager.template().url_for(3)).unwrap();
	let pairs: Vec<(String, String)> = next.query_pairs().into_owned().collect();
	assert_eq!(
		pairs,
		vec![
			("paged".to_string(), "3".to_string()),
			("p".to_string(), "2".to_string()),
			("per_page".to_string(), "10".to_string()),
		]
	);
}
