use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};

/// Tolka en klockslagssträng "HH:MM" till minuter sedan midnatt
///
/// Felformaterade strängar (saknat kolon, icke-numeriska delar) ger 0
/// snarare än fel - anropare måste tåla tyst nollade längder.
pub fn parse_time_to_minutes(s: &str) -> i64 {
    let Some((hours, minutes)) = s.trim().split_once(':') else {
        return 0;
    };

    match (hours.parse::<i64>(), minutes.parse::<i64>()) {
        (Ok(h), Ok(m)) => h * 60 + m,
        _ => 0,
    }
}

/// Längd i minuter mellan två klockslag på samma dag
///
/// Negativ längd (slut före start) klipps till 0 - inga pass över midnatt.
pub fn duration_minutes(start: &str, end: &str) -> i64 {
    (parse_time_to_minutes(end) - parse_time_to_minutes(start)).max(0)
}

/// Söndagen på eller före ett datum
pub fn week_start_date(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Senaste söndag kl 00:00 relativt en tidpunkt
pub fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    week_start_date(now.date_naive())
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Antal dagar kvar till en deadline, uppåtavrundat till hela dagar
pub fn days_left(now: DateTime<Utc>, deadline: DateTime<Utc>) -> i64 {
    let secs = (deadline - now).num_seconds();
    if secs <= 0 {
        return 0;
    }
    (secs + 86_399) / 86_400
}

/// Relativ ålder för visning: "Nm" under en timme, "Nh" under ett dygn, annars "Nd"
pub fn format_age(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let mins = (now - then).num_minutes().max(0);
    let hours = mins / 60;
    let days = hours / 24;

    if mins < 60 {
        format!("{}m", mins)
    } else if hours < 24 {
        format!("{}h", hours)
    } else {
        format!("{}d", days)
    }
}

/// Svensk veckodagsetikett
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Söndag",
        Weekday::Mon => "Måndag",
        Weekday::Tue => "Tisdag",
        Weekday::Wed => "Onsdag",
        Weekday::Thu => "Torsdag",
        Weekday::Fri => "Fredag",
        Weekday::Sat => "Lördag",
    }
}
