use pretty_assertions::assert_eq;
use tests::prelude::*;

use morph::OverrideKind;

#[derive(Debug, Default, Shape)]
struct Employee {
    name: String,
    title: String,
    salary: u64,
    manager: String,
}

#[derive(Debug, Default, PartialEq, Shape)]
struct EmployeeCard {
    name: String,
    title: String,
    salary: u64,
    reports_to: String,
    #[shape(read_only)]
    badge: String,
}

fn grace() -> Employee {
    Employee {
        name: "Grace".to_string(),
        title: "Engineer".to_string(),
        salary: 120_000,
        manager: "Ada".to_string(),
    }
}

#[test]
fn override_wins_over_convention() {
    init_tracing();

    let mut config = MapperConfiguration::new();
    config
        .create_map::<Employee, EmployeeCard>()
        .for_member(EmployeeCard::members().title(), |opt| {
            opt.map_from(|e: &Employee| e.title.to_uppercase())
        })
        .unwrap();

    let card: EmployeeCard = config.create_mapper().map(&grace()).unwrap();

    assert_eq!(card.title, "ENGINEER");
    assert_eq!(card.name, "Grace");
}

#[test]
fn ignored_field_keeps_default_despite_source_field() {
    init_tracing();

    let mut config = MapperConfiguration::new();
    config
        .create_map::<Employee, EmployeeCard>()
        .for_member(EmployeeCard::members().salary(), |opt| opt.ignore())
        .unwrap();

    let card: EmployeeCard = config.create_mapper().map(&grace()).unwrap();

    assert_eq!(card.salary, 0);
    assert_eq!(card.name, "Grace");
}

#[test]
fn map_from_member_copies_a_differently_named_field() {
    init_tracing();

    let mut config = MapperConfiguration::new();
    config
        .create_map::<Employee, EmployeeCard>()
        .for_member(EmployeeCard::members().reports_to(), |opt| {
            opt.map_from_member(Employee::members().manager())
        })
        .unwrap();

    let card: EmployeeCard = config.create_mapper().map(&grace()).unwrap();

    assert_eq!(card.reports_to, "Ada");
}

#[test]
fn member_selected_by_name() {
    init_tracing();

    let mut config = MapperConfiguration::new();
    config
        .create_map::<Employee, EmployeeCard>()
        .for_member_named::<String, _>("reports_to", |opt| {
            opt.map_from(|e: &Employee| format!("{} (manager)", e.manager))
        })
        .unwrap();

    let card: EmployeeCard = config.create_mapper().map(&grace()).unwrap();

    assert_eq!(card.reports_to, "Ada (manager)");
}

#[test]
fn unknown_member_name_is_rejected() {
    let mut mapping = Mapping::<Employee, EmployeeCard>::new();

    let err = assert_err!(
        mapping.for_member_named::<String, _>("nickname", |opt| opt.ignore()),
        is_invalid_member
    );

    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "invalid member `EmployeeCard.nickname`: not a field of the shape"
    );
    assert!(!mapping.has_override("nickname"));
}

#[test]
fn member_name_with_wrong_type_is_rejected() {
    let mut mapping = Mapping::<Employee, EmployeeCard>::new();

    let err = assert_err!(
        mapping.for_member_named::<u32, _>("salary", |opt| opt.ignore()),
        is_invalid_member
    );

    assert_eq!(
        err.to_string(),
        "invalid member `EmployeeCard.salary`: field holds u64, not u32"
    );
}

#[test]
fn read_only_destination_field_is_rejected() {
    let mut mapping = Mapping::<Employee, EmployeeCard>::new();

    let err = assert_err!(
        mapping.for_member(EmployeeCard::members().badge(), |opt| opt.ignore()),
        is_invalid_member
    );

    assert_eq!(
        err.to_string(),
        "invalid member `EmployeeCard.badge`: field is not writable"
    );
}

#[test]
fn write_only_source_member_is_rejected() {
    #[derive(Debug, Default, Shape)]
    struct Login {
        #[shape(write_only)]
        password: String,
    }

    #[derive(Debug, Default, Shape)]
    struct LoginView {
        hint: String,
    }

    let mut mapping = Mapping::<Login, LoginView>::new();

    let err = assert_err!(
        mapping.for_member(LoginView::members().hint(), |opt| {
            opt.map_from_member(Login::members().password())
        }),
        is_invalid_member
    );

    assert_eq!(
        err.to_string(),
        "invalid member `Login.password`: field is not readable"
    );
}

#[test]
fn second_override_for_a_member_is_rejected() {
    let mut mapping = Mapping::<Employee, EmployeeCard>::new();

    mapping
        .for_member(EmployeeCard::members().title(), |opt| opt.ignore())
        .unwrap();

    let err = assert_err!(
        mapping.for_member(EmployeeCard::members().title(), |opt| {
            opt.map_from(|e: &Employee| e.title.clone())
        }),
        is_duplicate_member
    );

    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "member `EmployeeCard.title` already has an override"
    );

    // The first rule is kept
    assert!(mapping.is_ignored("title"));
}

#[test]
fn overrides_are_listed_in_declaration_order() {
    let mut mapping = Mapping::<Employee, EmployeeCard>::new();

    mapping
        .for_member(EmployeeCard::members().salary(), |opt| opt.ignore())
        .unwrap()
        .for_member(EmployeeCard::members().reports_to(), |opt| {
            opt.map_from_member(Employee::members().manager())
        })
        .unwrap()
        .for_member(EmployeeCard::members().name(), |opt| {
            opt.map_from(|e: &Employee| e.name.clone())
        })
        .unwrap();

    let overrides: Vec<_> = mapping.overrides().collect();

    assert_eq!(
        overrides,
        [
            ("salary", OverrideKind::Ignore),
            ("reports_to", OverrideKind::MapFromMember("manager")),
            ("name", OverrideKind::MapFrom),
        ]
    );

    assert!(mapping.has_override("name"));
    assert!(!mapping.has_override("title"));
    assert!(!mapping.is_ignored("name"));
}

#[derive(Debug)]
struct InvalidSalary(u64);

impl std::fmt::Display for InvalidSalary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "salary {} is out of range", self.0)
    }
}

impl std::error::Error for InvalidSalary {}

#[test]
fn rule_failure_is_returned_verbatim() {
    init_tracing();

    let mut config = MapperConfiguration::new();
    config
        .create_map::<Employee, EmployeeCard>()
        .for_member(EmployeeCard::members().salary(), |opt| {
            opt.try_map_from(|e: &Employee| {
                if e.salary > 100_000 {
                    Err(InvalidSalary(e.salary))
                } else {
                    Ok(e.salary)
                }
            })
        })
        .unwrap();

    let mapper = config.create_mapper();

    let err = assert_err!(
        mapper.map::<Employee, EmployeeCard>(&grace()),
        is_rule_failed
    );

    assert_eq!(err.to_string(), "salary 120000 is out of range");
    assert_eq!(err.rule_member(), Some(("EmployeeCard", "salary")));

    let cause = err.rule_error().unwrap();
    assert!(matches!(
        cause.downcast_ref::<InvalidSalary>(),
        Some(InvalidSalary(120_000))
    ));

    // A failing call does not affect later ones
    let cheap = Employee {
        salary: 50_000,
        ..grace()
    };
    let card: EmployeeCard = mapper.map(&cheap).unwrap();
    assert_eq!(card.salary, 50_000);
}

#[test]
fn anyhow_rule_failure() {
    init_tracing();

    let mut config = MapperConfiguration::new();
    config
        .create_map::<Employee, EmployeeCard>()
        .for_member(EmployeeCard::members().title(), |opt| {
            opt.try_map_from(|_: &Employee| -> anyhow::Result<String> {
                anyhow::bail!("title service unavailable")
            })
        })
        .unwrap();

    let err = assert_err!(
        config
            .create_mapper()
            .map::<Employee, EmployeeCard>(&grace()),
        is_rule_failed
    );

    assert_eq!(err.to_string(), "title service unavailable");
}
