use psychomatrix_core::seed::{derive, derive_life_path, derive_name_digits, SeedError};
use psychomatrix_core::types::SeedInput;

fn make_input(name: &str, date: &str) -> SeedInput {
    SeedInput {
        full_name: name.to_string(),
        birth_date: date.to_string(),
        birth_time: "12:00".to_string(),
    }
}

#[test]
fn life_path_known_value() {
    // 0+1+0+1+2+0+0+0 = 4
    assert_eq!(derive_life_path("01/01/2000"), Ok(4));
    // Separator style must not matter, only the digits.
    assert_eq!(derive_life_path("2000-01-01"), Ok(4));
}

#[test]
fn life_path_reduces_iteratively() {
    // 1+9+9+0+0+5+1+5 = 30 -> 3
    assert_eq!(derive_life_path("1990-05-15"), Ok(3));
}

#[test]
fn invariant_master_numbers_are_terminal() {
    // 1+9+9+1+0+1+0+8 = 29 -> 2+9 = 11, not reduced to 2
    assert_eq!(derive_life_path("1991-01-08"), Ok(11));
    // 2+0+0+8+0+9+0+3 = 22 exactly
    assert_eq!(derive_life_path("2008-09-03"), Ok(22));
}

#[test]
fn invariant_life_path_range() {
    let dates = [
        "1970-01-01",
        "1984-12-31",
        "1999-09-09",
        "2008-09-03",
        "2023-06-15",
        "1991-01-08",
    ];
    for date in dates {
        let value = derive_life_path(date).expect("date has digits");
        assert!(
            (1..=9).contains(&value) || value == 11 || value == 22,
            "life path {value} out of range for {date}"
        );
    }
}

#[test]
fn life_path_rejects_digitless_dates() {
    assert_eq!(derive_life_path(""), Err(SeedError::NoDigits));
    assert_eq!(derive_life_path("n/a"), Err(SeedError::NoDigits));
}

#[test]
fn name_digits_known_value() {
    assert_eq!(derive_name_digits("Ada"), vec![1, 4, 1]);
}

#[test]
fn name_digits_skip_non_letters_and_ignore_case() {
    assert_eq!(derive_name_digits("Ada Lovelace"), derive_name_digits("ada-lovelace!"));
    assert_eq!(derive_name_digits("  A  d a "), vec![1, 4, 1]);
}

#[test]
fn name_digits_empty_for_symbol_only_names() {
    assert_eq!(derive_name_digits(""), Vec::<u8>::new());
    assert_eq!(derive_name_digits("123 !?"), Vec::<u8>::new());
}

#[test]
fn derived_seed_components_pad_with_one() {
    let seed = derive(&make_input("Al", "2000-01-01")).expect("derivable");
    // A -> 1, L -> 3; third name digit padded.
    assert_eq!(seed.components(), [4, 1, 3, 1]);

    let seed = derive(&make_input("", "2000-01-01")).expect("derivable");
    assert_eq!(seed.components(), [4, 1, 1, 1]);
}

#[test]
fn derive_surfaces_only_the_date_error() {
    let err = derive(&make_input("Ada", "unknown")).expect_err("no digits");
    assert_eq!(err, SeedError::NoDigits);
}
