//! Full numerology profile for one person.

use anka_calendar::CalendarDate;
use anka_derived::{
    AddressNumber, Balance, Bridge, Cornerstone, CycleStage, DateDigits, EssenceEntry,
    HealthProfile, LuckyNumber, Maturity, PersonalMonthRow, PersonalYearEntry, Telephone,
    Transits, address_number, balance_number, birthday_number, bridge_number, challenge_numbers,
    cornerstone, destiny_number, essence_cycle, health_profile, life_cycles, lucky_number,
    maturity_number, personal_month_matrix, personal_year_number, personal_year_series,
    pinnacle_cycles, telephone_number, transit_numbers,
};
use anka_letters::{
    BreakdownMode, BreakdownOptions, Locale, NameBreakdown, breakdown_name, infer_locale,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::ProfileConfig;
use crate::error::AnkaError;

/// Everything a profile is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub birth_name: String,
    /// Name in use today, if different from the birth name.
    #[serde(default)]
    pub current_name: Option<String>,
    pub birth: CalendarDate,
    pub target_year: i32,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
}

impl ProfileRequest {
    pub fn new(birth_name: impl Into<String>, birth: CalendarDate, target_year: i32) -> Self {
        Self {
            birth_name: birth_name.into(),
            current_name: None,
            birth,
            target_year,
            address: None,
            telephone: None,
        }
    }
}

/// Name number with its vowel (soul urge) and consonant (personality) parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameNumbers {
    pub name: NameBreakdown,
    pub vowel: NameBreakdown,
    pub consonant: NameBreakdown,
}

impl NameNumbers {
    pub fn of(name: &str) -> Self {
        Self {
            name: breakdown_name(name, BreakdownOptions::mode(BreakdownMode::All)),
            vowel: breakdown_name(name, BreakdownOptions::mode(BreakdownMode::Vowel)),
            consonant: breakdown_name(name, BreakdownOptions::mode(BreakdownMode::Consonant)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreNumbers {
    pub name: NameNumbers,
    pub destiny: DateDigits,
    pub birthday: DateDigits,
    pub maturity: Maturity,
    pub personal_year: DateDigits,
}

/// Numbers of the current name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentIdentity {
    pub name: NameBreakdown,
    pub vowel: NameBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeNumbers {
    pub cornerstone: Option<Cornerstone>,
    /// Between destiny and name numbers.
    pub life_bridge: Bridge,
    /// Between vowel and consonant numbers.
    pub soul_bridge: Bridge,
    pub balance: Option<Balance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Influences {
    pub transits: Transits,
    pub health: Option<HealthProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticalNumbers {
    pub address: Option<AddressNumber>,
    pub lucky: LuckyNumber,
    pub telephone: Option<Telephone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileTables {
    pub personal_years: Vec<PersonalYearEntry>,
    pub personal_months: Vec<PersonalMonthRow>,
    pub essence: Vec<EssenceEntry>,
    pub pinnacles: Vec<CycleStage>,
    pub life_cycles: Vec<CycleStage>,
    pub challenges: Vec<CycleStage>,
}

/// Every number computed for one [`ProfileRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumerologyProfile {
    /// Locale suggested by the birth name.
    pub locale: Locale,
    pub target_year: i32,
    pub core: CoreNumbers,
    pub current: Option<CurrentIdentity>,
    pub bridges: BridgeNumbers,
    pub influences: Influences,
    pub practical: PracticalNumbers,
    pub tables: ProfileTables,
}

/// Compute a full profile.
///
/// Fails on an invalid config, a blank birth name, or a birth date that
/// does not convert to Gregorian. Blank optional fields are treated as
/// absent.
pub fn compute_profile(
    request: &ProfileRequest,
    config: &ProfileConfig,
) -> Result<NumerologyProfile, AnkaError> {
    config.validate()?;
    if request.birth_name.trim().is_empty() {
        return Err(AnkaError::EmptyName);
    }

    let birth = &request.birth;
    let target_year = request.target_year;

    let names = NameNumbers::of(&request.birth_name);
    let (name_n, vowel_n, consonant_n) = (
        names.name.number,
        names.vowel.number,
        names.consonant.number,
    );

    let destiny = destiny_number(birth)?;
    let birthday = birthday_number(birth)?;
    let personal_year = personal_year_number(birth, target_year)?;
    let maturity = maturity_number(name_n, destiny.number);

    let current = non_blank(request.current_name.as_deref()).map(|n| CurrentIdentity {
        name: breakdown_name(n, BreakdownOptions::mode(BreakdownMode::All)),
        vowel: breakdown_name(n, BreakdownOptions::mode(BreakdownMode::Vowel)),
    });

    let bridges = BridgeNumbers {
        cornerstone: cornerstone(&request.birth_name),
        life_bridge: bridge_number(destiny.number, name_n),
        soul_bridge: bridge_number(vowel_n, consonant_n),
        balance: balance_number(&request.birth_name),
    };

    let influences = Influences {
        transits: transit_numbers(name_n, vowel_n, consonant_n, personal_year.number),
        health: health_profile(
            Some(name_n),
            Some(personal_year.number),
            Some(birthday.number),
        ),
    };

    let practical = PracticalNumbers {
        address: non_blank(request.address.as_deref()).and_then(address_number),
        lucky: lucky_number(birth)?,
        telephone: non_blank(request.telephone.as_deref()).and_then(telephone_number),
    };

    let essence_start = target_year.saturating_sub_unsigned(config.essence_lead_years);
    let tables = ProfileTables {
        personal_years: personal_year_series(birth, target_year, config.series_years)?,
        personal_months: personal_month_matrix(
            birth,
            target_year,
            config.series_years,
            config.month_columns,
        )?,
        essence: essence_cycle(&names.name, essence_start, config.essence_length),
        pinnacles: pinnacle_cycles(birth)?,
        life_cycles: life_cycles(birth)?,
        challenges: challenge_numbers(birth)?,
    };

    debug!(
        "event=profile_compute script={} target_year={} name={} destiny={}",
        names.name.script.tag(),
        target_year,
        name_n,
        destiny.number
    );

    Ok(NumerologyProfile {
        locale: infer_locale(&request.birth_name),
        target_year,
        core: CoreNumbers {
            name: names,
            destiny,
            birthday,
            maturity,
            personal_year,
        },
        current,
        bridges,
        influences,
        practical,
        tables,
    })
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
