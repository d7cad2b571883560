use coronatracker::services::country::CountryError;
use coronatracker::{country_code, CountryCodes, DEFAULT_COUNTRY_CODE};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_known_countries_resolve_to_alpha2() {
    let codes = CountryCodes::builtin();

    for (name, expected) in [
        ("Germany", "DE"),
        ("United Kingdom", "GB"),
        ("US", "US"),
        ("Mainland China", "CN"),
        ("Korea, South", "KR"),
        ("Taiwan*", "TW"),
        ("Congo (Kinshasa)", "CD"),
        ("West Bank and Gaza", "PS"),
    ] {
        assert_eq!(country_code(name, &codes), expected, "country {}", name);
    }
}

#[test]
fn test_unknown_country_falls_back_to_default() {
    let codes = CountryCodes::builtin();

    assert_eq!(DEFAULT_COUNTRY_CODE, "XX");
    assert_eq!(country_code("Diamond Princess", &codes), "XX");
    assert_eq!(country_code("", &codes), "XX");
    assert_eq!(codes.lookup("Narnia"), None);
}

#[test]
fn test_load_overlays_file_and_upper_cases() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("country-codes.json");
    fs::write(
        &path,
        r#"{ "Cruise Ship": "xs", "Germany": "de", "Republic of Ireland": "IE" }"#,
    )?;

    let codes = CountryCodes::load(&path)?;

    assert_eq!(codes.lookup("Cruise Ship"), Some("xs"));
    assert_eq!(country_code("Cruise Ship", &codes), "XS");
    assert_eq!(country_code("Germany", &codes), "DE");
    assert_eq!(country_code("Republic of Ireland", &codes), "IE");
    // builtin entries remain
    assert_eq!(country_code("France", &codes), "FR");
    assert!(codes.len() > CountryCodes::builtin().len());

    Ok(())
}

#[test]
fn test_load_missing_file_uses_builtin() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let codes = CountryCodes::load(&temp_dir.path().join("absent.json"))?;

    assert_eq!(codes.len(), CountryCodes::builtin().len());
    assert_eq!(country_code("Japan", &codes), "JP");

    Ok(())
}

#[test]
fn test_load_rejects_malformed_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;

    let invalid_json = temp_dir.path().join("invalid.json");
    fs::write(&invalid_json, "{ not json")?;
    assert!(matches!(
        CountryCodes::load(&invalid_json),
        Err(CountryError::FileError(_))
    ));

    let empty_code = temp_dir.path().join("empty.json");
    fs::write(&empty_code, r#"{ "Nowhere": "  " }"#)?;
    assert!(matches!(
        CountryCodes::load(&empty_code),
        Err(CountryError::LoadFailed(_))
    ));

    Ok(())
}
