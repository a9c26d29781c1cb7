use numerology_engine::{
    calculate_all_numbers, calculate_expression, calculate_life_path, calculate_personality,
    calculate_soul_urge, letter_sums, meaning_for, reduce_to_single_digit_or_master, BirthDate,
    ZodiacSign,
};
use proptest::prelude::*;

fn is_valid_reduced(n: u32) -> bool {
    n <= 9 || n == 11 || n == 22 || n == 33
}

fn birth_date() -> impl Strategy<Value = String> {
    (1u32..=9999, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

proptest! {
    #[test]
    fn reduction_lands_in_allowed_set(n in any::<u32>()) {
        let reduced = reduce_to_single_digit_or_master(n);
        prop_assert!(is_valid_reduced(reduced), "{} reduced to {}", n, reduced);
    }

    #[test]
    fn reduction_is_idempotent(n in any::<u32>()) {
        let once = reduce_to_single_digit_or_master(n);
        prop_assert_eq!(reduce_to_single_digit_or_master(once), once);
    }

    #[test]
    fn vowel_and_consonant_sums_partition_total(name in ".{0,60}") {
        let sums = letter_sums(&name);
        prop_assert_eq!(sums.vowels + sums.consonants, sums.total);
        prop_assert_eq!(calculate_expression(&name), reduce_to_single_digit_or_master(sums.total));
        prop_assert_eq!(calculate_soul_urge(&name), reduce_to_single_digit_or_master(sums.vowels));
        prop_assert_eq!(calculate_personality(&name), reduce_to_single_digit_or_master(sums.consonants));
    }

    #[test]
    fn non_letters_never_change_name_numbers(name in "[a-zA-Z]{1,20}", noise in "[ .'0-9-]{0,10}") {
        let noisy = format!("{}{}", noise, name);
        prop_assert_eq!(calculate_expression(&noisy), calculate_expression(&name));
        prop_assert_eq!(calculate_soul_urge(&noisy), calculate_soul_urge(&name));
    }

    #[test]
    fn all_numbers_are_deterministic(name in "[a-zA-Z ]{1,30}", date in birth_date()) {
        let first = calculate_all_numbers(&name, &date).unwrap();
        let second = calculate_all_numbers(&name, &date).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn real_names_always_have_a_meaning(name in "[a-z]{1,30}", date in birth_date()) {
        let profile = calculate_all_numbers(&name, &date).unwrap();
        prop_assert!(meaning_for(profile.expression).is_ok());
        prop_assert!(meaning_for(profile.life_path).is_ok());
    }

    #[test]
    fn life_path_uses_every_digit(date in birth_date()) {
        let digit_total: u32 = date.chars().filter_map(|c| c.to_digit(10)).sum();
        prop_assert_eq!(
            calculate_life_path(&date).unwrap(),
            reduce_to_single_digit_or_master(digit_total)
        );
    }
}

#[test]
fn zodiac_ranges_cover_every_day_of_a_leap_year() {
    let mut date = BirthDate::parse("2024-01-01").unwrap().date();
    let mut days = 0;
    let mut counts = std::collections::HashMap::new();

    while date.format("%Y").to_string() == "2024" {
        let birth_date = BirthDate::from_date(date).unwrap();
        let sign = ZodiacSign::from_birth_date(&birth_date);
        *counts.entry(sign).or_insert(0) += 1;
        days += 1;
        date = date.succ_opt().unwrap();
    }

    assert_eq!(days, 366);
    assert_eq!(counts.len(), 12);
    // Jan 1-19 plus Dec 22-31
    assert_eq!(counts[&ZodiacSign::Capricorn], 29);
    assert_eq!(counts[&ZodiacSign::Pisces], 31);
}

#[test]
fn from_month_day_agrees_with_every_real_day() {
    for month in 1..=12u32 {
        for day in 1..=31u32 {
            let via_pair = ZodiacSign::from_month_day(month, day);
            let via_date = BirthDate::parse(&format!("2024-{:02}-{:02}", month, day))
                .ok()
                .map(|d| ZodiacSign::from_birth_date(&d));
            assert_eq!(via_pair, via_date, "{}/{}", month, day);
        }
    }
}
