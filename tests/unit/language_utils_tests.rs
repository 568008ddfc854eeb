/*!
 * Tests for language code utilities
 */

use anyhow::Result;
use htranslate::language_utils;

/// Test that valid ISO 639-1 codes validate
#[test]
fn test_validate_language_code_withPart1Codes_shouldSucceed() {
    assert!(language_utils::validate_language_code("zh").is_ok());
    assert!(language_utils::validate_language_code("en").is_ok());
    assert!(language_utils::validate_language_code("fr").is_ok());
}

/// Test that valid ISO 639-2 codes validate, in both T and B spellings
#[test]
fn test_validate_language_code_withPart2Codes_shouldSucceed() {
    assert!(language_utils::validate_language_code("zho").is_ok());
    assert!(language_utils::validate_language_code("chi").is_ok());
    assert!(language_utils::validate_language_code("fra").is_ok());
    assert!(language_utils::validate_language_code("fre").is_ok());
}

/// Test that invalid codes are rejected
#[test]
fn test_validate_language_code_withInvalidCodes_shouldFail() {
    assert!(language_utils::validate_language_code("xx").is_err());
    assert!(language_utils::validate_language_code("xyz1").is_err());
    assert!(language_utils::validate_language_code("").is_err());
}

/// Test that codes are normalized to the 2-letter lang-attribute form
#[test]
fn test_normalize_for_lang_attribute_withVariousForms_shouldPreferPart1() -> Result<()> {
    assert_eq!(language_utils::normalize_for_lang_attribute("zh")?, "zh");
    assert_eq!(language_utils::normalize_for_lang_attribute("zho")?, "zh");
    assert_eq!(language_utils::normalize_for_lang_attribute("chi")?, "zh");
    assert_eq!(language_utils::normalize_for_lang_attribute("fra")?, "fr");
    assert_eq!(language_utils::normalize_for_lang_attribute("fre")?, "fr");
    assert_eq!(language_utils::normalize_for_lang_attribute("eng")?, "en");

    Ok(())
}

/// Test that whitespace and case are tolerated
#[test]
fn test_normalize_for_lang_attribute_withMixedCase_shouldNormalize() -> Result<()> {
    assert_eq!(language_utils::normalize_for_lang_attribute(" ZH ")?, "zh");
    assert_eq!(language_utils::normalize_for_lang_attribute("Fra")?, "fr");

    Ok(())
}

/// Test that invalid codes cannot be normalized
#[test]
fn test_normalize_for_lang_attribute_withInvalidCode_shouldFail() {
    assert!(language_utils::normalize_for_lang_attribute("xx").is_err());
    assert!(language_utils::normalize_for_lang_attribute("qqq").is_err());
}

/// Test that language names resolve for log output
#[test]
fn test_get_language_name_withValidCodes_shouldReturnName() -> Result<()> {
    assert_eq!(language_utils::get_language_name("zh")?, "Chinese");
    assert_eq!(language_utils::get_language_name("fre")?, "French");

    Ok(())
}
