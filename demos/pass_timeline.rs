use chrono::{TimeZone, Utc};
use heavens_above::{
    Clock, Config, DetailTable, FixedClock, Observer, PassQuery, SatellitePass, SummaryRow,
};

fn main() -> heavens_above::Result<()> {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap());
    let config = Config::default();
    let observer = Observer::new(51.48, 0.0);

    let query = PassQuery::starting_now(25544, observer, &clock, &config)?;
    println!("GET {} {:?}", query.url(), query.query_params());
    println!("form {:?}", query.form_fields());

    let summary = SummaryRow::from_cells(&[
        "15 Jun", "-2.3", "21:00:12", "10°", "WSW", "21:03:40", "54°", "S", "21:07:05", "10°",
        "ESE", "visible",
    ])?;
    let mut pass = SatellitePass::from_summary(
        25544,
        observer,
        &summary,
        "passdetails.aspx?satid=25544",
        clock.now(),
    )?;
    println!("summary: {pass}");

    let detail = DetailTable::from_rows(&[
        ["Rises", "20:57:10", "0°", "248° (WSW)", "2,190 km", "-", "-14.2°"],
        ["Visible", "21:00:12", "10°", "251° (WSW)", "1,420 km", "-0.9", "-14.5°"],
        ["Maximum altitude", "21:03:40", "54°", "178° (S)", "490 km", "-2.3", "-15.0°"],
        ["Disappears", "21:07:05", "10°", "105° (ESE)", "1,410 km", "-1.0", "-15.4°"],
        ["Sets", "21:10:02", "0°", "102° (ESE)", "2,200 km", "-", "-15.8°"],
    ])?;
    pass.apply_detail(&detail, config.rollover_policy)?;

    println!("detail: {}", pass.detail_url());
    for (role, record) in pass.timeline().iter() {
        println!("  {role:<8} {record}");
    }
    if let Some(window) = pass.timeline().horizon_window() {
        println!("above horizon: {window} ({})", window.duration_seconds());
    }
    for warning in pass.timeline().rollover_warnings() {
        println!("warning: {warning}");
    }
    Ok(())
}
