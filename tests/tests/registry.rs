use pretty_assertions::assert_eq;
use tests::prelude::*;

use morph::MappingKey;

#[derive(Debug, Default, Clone, PartialEq, Shape)]
struct Book {
    title: String,
    pages: u32,
}

#[derive(Debug, Default, PartialEq, Shape)]
struct BookDto {
    title: String,
    pages: u32,
}

#[derive(Debug, Default, PartialEq, Shape)]
struct BookSummary {
    title: String,
}

#[test]
fn unregistered_pair_fails() {
    let mapper = mappings!(Book => BookDto).create_mapper();

    let err = assert_err!(
        mapper.map::<Book, BookSummary>(&Book::default()),
        is_mapping_not_found
    );

    assert_eq!(
        err.to_string(),
        "no mapping found for types Book and BookSummary"
    );
    assert!(!mapper.contains::<Book, BookSummary>());
}

#[test]
fn pairs_are_ordered() {
    let mapper = mappings!(Book => BookDto).create_mapper();

    assert!(mapper.contains::<Book, BookDto>());
    assert!(!mapper.contains::<BookDto, Book>());

    assert_err!(
        mapper.map::<BookDto, Book>(&BookDto::default()),
        is_mapping_not_found
    );
}

#[test]
fn empty_configuration() {
    let config = mappings!();
    assert!(config.is_empty());

    let mapper = config.create_mapper();
    assert!(mapper.mappings().is_empty());
    assert_err!(
        mapper.map::<Book, BookDto>(&Book::default()),
        is_mapping_not_found
    );
}

#[test]
fn first_registered_mapping_wins() {
    init_tracing();

    let mut config = MapperConfiguration::new();

    config
        .create_map::<Book, BookDto>()
        .for_member(BookDto::members().title(), |opt| {
            opt.map_from(|b: &Book| format!("first: {}", b.title))
        })
        .unwrap();

    config
        .create_map::<Book, BookDto>()
        .for_member(BookDto::members().title(), |opt| {
            opt.map_from(|b: &Book| format!("second: {}", b.title))
        })
        .unwrap();

    assert_eq!(config.len(), 2);

    let mapper = config.create_mapper();
    assert_eq!(mapper.mappings().len(), 2);

    let book = Book {
        title: "Dune".to_string(),
        pages: 412,
    };

    let dto: BookDto = mapper.map(&book).unwrap();
    assert_eq!(dto.title, "first: Dune");
}

#[test]
fn mappings_are_exposed_in_registration_order() {
    let config = mappings!(Book => BookDto, Book => BookSummary, BookDto => Book);

    let keys: Vec<_> = config.mappings().iter().map(|m| m.key()).collect();

    assert_eq!(
        keys,
        [
            MappingKey::of::<Book, BookDto>(),
            MappingKey::of::<Book, BookSummary>(),
            MappingKey::of::<BookDto, Book>(),
        ]
    );

    let names: Vec<_> = config.mappings().iter().map(|m| m.names()).collect();
    assert_eq!(names[1], ("Book", "BookSummary"));

    assert!(config.mappings()[0].downcast_ref::<Book, BookDto>().is_some());
    assert!(config.mappings()[0].downcast_ref::<Book, BookSummary>().is_none());
}

#[test]
fn mapper_does_not_see_later_registrations() {
    let mut config = mappings!(Book => BookDto);
    let mapper = config.create_mapper();

    config.create_map::<Book, BookSummary>();

    assert!(!mapper.contains::<Book, BookSummary>());
    assert!(config.create_mapper().contains::<Book, BookSummary>());
}

#[test]
fn reverse_map_only_sets_the_flag() {
    init_tracing();

    let mut config = MapperConfiguration::new();

    let mapping = config.create_map::<Book, BookDto>().reverse_map();
    assert!(mapping.is_reversed());

    let mapper = config.create_mapper();
    assert!(mapper.mappings()[0].is_reversed());

    // No inverse mapping is created
    assert!(!mapper.contains::<BookDto, Book>());
    assert_err!(
        mapper.map::<BookDto, Book>(&BookDto::default()),
        is_mapping_not_found
    );
}

#[test]
fn both_directions_when_registered_explicitly() {
    let mapper = mappings!(Book => BookDto, BookDto => Book).create_mapper();

    let book = Book {
        title: "Emma".to_string(),
        pages: 474,
    };

    let dto: BookDto = mapper.map(&book).unwrap();
    let back: Book = mapper.map(&dto).unwrap();

    assert_eq!(back, book);
}

#[test]
fn mapper_clones_share_mappings() {
    let mapper = mappings!(Book => BookSummary).create_mapper();
    let cloned = mapper.clone();

    assert!(std::sync::Arc::ptr_eq(
        &mapper.mappings()[0],
        &cloned.mappings()[0]
    ));

    let summary: BookSummary = cloned
        .map(&Book {
            title: "Ulysses".to_string(),
            pages: 730,
        })
        .unwrap();

    assert_eq!(summary.title, "Ulysses");
}
