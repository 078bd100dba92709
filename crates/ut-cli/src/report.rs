//! Text rendering of the temporal analysis report.
//!
//! Every section writes plain lines to a `Write` sink. The numbers come from
//! `ut-core`; nothing here does arithmetic beyond what the layout needs.

use std::io::{self, Write};

use ut_core::constants::{
    AVERAGE_BLINKING, AVERAGE_BREATHING, AVERAGE_HEARTBEAT, AVERAGE_HUMAN_LIFE,
};
use ut_core::{
    CREATION_ADAM_AC, CivilDateTime, DayBreakdown, PROJECTION_DELTAS, UNIVERSE_AGE_YEARS,
    YEARS_PER_COSMIC_DAY, YEARS_PER_DIVINE_DAY, compare_chronologies, project, seconds_per_event,
    temporal_velocity, to_hebrew_year, to_hijri_year, to_ussher_year, universe_age,
    years_since_mark, years_to_perception, years_to_scales,
};

use crate::format::{banner_bottom, banner_line, banner_top, sci};

/// Everything the report needs from the outside world.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Wall-clock time at startup.
    pub now: CivilDateTime,
    /// Reference year for elapsed-years computations.
    pub anchor_year: i32,
    /// Print the scripture references section.
    pub references: bool,
}

pub struct Report {
    config: ReportConfig,
    baseline: f64,
}

impl Report {
    pub fn new(config: ReportConfig) -> Self {
        let baseline = years_since_mark(CREATION_ADAM_AC, config.anchor_year);
        Self { config, baseline }
    }

    /// Years since Adam for the configured anchor year.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Render every section in report order.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        self.header(out)?;
        self.system_time(out)?;
        self.primary_scales(out)?;
        self.chronologies(out)?;
        self.human_life_scales(out)?;
        self.temporal_relativity(out)?;
        self.temporal_distortions(out)?;
        self.universe_age(out)?;
        self.future_projections(out)?;
        self.temporal_velocity(out)?;
        if self.config.references {
            self.textual_references(out)?;
        }
        self.closing(out)
    }

    fn header(&self, out: &mut impl Write) -> io::Result<()> {
        let version = env!("CARGO_PKG_VERSION");
        let short_version = version.rsplit_once('.').map_or(version, |(v, _)| v);
        writeln!(out, "{}", banner_top())?;
        writeln!(out, "{}", banner_line(&format!("UNIVERSAL TIME CALCULATOR v{short_version}")))?;
        writeln!(out, "{}", banner_line("Multidimensional Time Analysis & Perception"))?;
        writeln!(out, "{}", banner_line(""))?;
        writeln!(out, "{}", banner_line("Created by: Malak Organization | Mulakut Al-Hikmah"))?;
        writeln!(out, "{}", banner_line("https://github.com/malakut-dev"))?;
        writeln!(out, "{}", banner_bottom())?;
        writeln!(out)
    }

    fn system_time(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "System Time (UTC): {}", self.config.now)
    }

    fn primary_scales(&self, out: &mut impl Write) -> io::Result<()> {
        tracing::debug!(baseline = self.baseline, "rendering primary scales");
        let scales = years_to_scales(self.baseline);

        writeln!(out, "\n [+] PRIMARY TEMPORAL SCALES")?;
        writeln!(
            out,
            " > Years since Adam (Islamic chronology): {:.2} years",
            scales.years_human
        )?;

        writeln!(out, "\n > Cosmic Time (1 day = {YEARS_PER_COSMIC_DAY} human years):")?;
        formatted_time(out, "cosmic", &scales.cosmic)?;

        writeln!(out, "\n > Divine Time (1 day = {YEARS_PER_DIVINE_DAY} human years):")?;
        formatted_time(out, "divine", &scales.divine)
    }

    fn chronologies(&self, out: &mut impl Write) -> io::Result<()> {
        let year = self.config.now.year;
        tracing::debug!(gregorian_year = year, "rendering chronologies");

        writeln!(out, "\n [+] ALTERNATIVE CHRONOLOGIES")?;
        writeln!(out, " > Current Gregorian year: {year}")?;
        writeln!(out, " > Hebrew calendar (Creation): {}", to_hebrew_year(year))?;
        writeln!(out, " > Ussher chronology (Creation): {}", to_ussher_year(year))?;
        writeln!(out, " > Islamic calendar (Hijra): {}", to_hijri_year(year))?;

        writeln!(out, "\n > Chronological comparisons:")?;
        for alt in compare_chronologies(self.config.anchor_year) {
            let scales = years_to_scales(alt.years_since_creation);
            writeln!(out, "   {}:", alt.name)?;
            writeln!(out, "     Years elapsed: {:.0}", alt.years_since_creation)?;
            writeln!(out, "     Cosmic days: {:.6}", scales.days_cosmic())?;
            writeln!(out, "     Divine days: {:.6}", scales.days_divine())?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn human_life_scales(&self, out: &mut impl Write) -> io::Result<()> {
        let years = self.baseline;
        let p = years_to_perception(years);

        writeln!(out, "\n [+] TEMPORAL SCALES OF HUMAN EXISTENCE")?;
        writeln!(out, " > Since Adam's creation:")?;
        writeln!(out, "   • Human generations: {:.0} generations", p.human_generations)?;
        writeln!(out, "   • Complete human lives: {:.0} lives", p.conscious_lives)?;
        writeln!(out, "   • Cultural memory cycles: {:.0} cycles", p.active_memory)?;

        writeln!(out, "\n > Accumulated physiological events:")?;
        writeln!(out, "   • Heartbeats: {} beats", sci(p.heartbeats, 2))?;
        writeln!(out, "   • Breaths: {} breaths", sci(p.breaths, 2))?;
        writeln!(out, "   • Blinks: {} blinks", sci(p.blinks, 2))?;

        writeln!(out, "\n > Individual vs. collective perspective:")?;
        writeln!(out, "   • For individual: {AVERAGE_HUMAN_LIFE:.0} years is a complete life")?;
        writeln!(
            out,
            "   • For humanity: {years:.0} years are {:.0} generations",
            p.human_generations
        )?;
        writeln!(out, "   • For species: {years:.0} years is conscious history")
    }

    fn temporal_relativity(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "\n [+] HUMAN TEMPORAL PERCEPTION RELATIVITY")?;
        write_lines(
            out,
            &[
                " > Subjective time perception varies with:",
                "   • Age: children perceive time more slowly",
                "   • Emotional state: anxiety accelerates, boredom decelerates",
                "   • Attention: intense focus compresses temporal perception",
                "   • Novelty: new experiences stretch subjective time",
                "",
                " > Natural perception scales:",
                "   • Psychological present: ~3 seconds",
                "   • Working memory: ~15-30 seconds",
                "   • Episodic memory: days to decades",
                "   • Cultural memory: 3-4 generations (~100 years)",
                "",
                " > Fundamental biological rhythms:",
            ],
        )?;
        for (label, rate, unit, event) in [
            ("Heartbeat", AVERAGE_HEARTBEAT, "bpm", "beat"),
            ("Breathing", AVERAGE_BREATHING, "rpm", "breath"),
            ("Blinking", AVERAGE_BLINKING, "per minute", "blink"),
        ] {
            writeln!(
                out,
                "   • {label}: {rate:.0} {unit} ({:.2} seconds/{event})",
                seconds_per_event(rate)
            )?;
        }
        write_lines(
            out,
            &[
                "   • Circadian cycle: 24 hours",
                "   • Ultradian cycle: 90-120 minutes",
            ],
        )
    }

    fn temporal_distortions(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "\n [+] PSYCHOLOGICAL TEMPORAL DISTORTIONS")?;
        write_lines(
            out,
            &[
                " > Factors that alter temporal perception:",
                "",
                " SUBJECTIVE ACCELERATION:",
                "   • Emergencies and danger (temporal tunnel)",
                "   • Flow state and high concentration",
                "   • Intense pleasurable experiences",
                "   • Aging (years pass faster)",
                "",
                " SUBJECTIVE DECELERATION:",
                "   • Boredom and forced waiting",
                "   • Intense physical or emotional pain",
                "   • First experiences (childhood)",
                "   • High novelty situations",
                "",
                " SPECIAL TEMPORAL PHENOMENA:",
                "   • Déjà vu: sensation of temporal repetition",
                "   • Jamais vu: estrangement of the familiar",
                "   • Premonition: temporal anticipation",
                "   • Nostalgia: compressed longing",
            ],
        )
    }

    fn universe_age(&self, out: &mut impl Write) -> io::Result<()> {
        let u = universe_age(UNIVERSE_AGE_YEARS);

        writeln!(out, "\n [+] UNIVERSE AGE IN ALTERNATIVE SCALES")?;
        writeln!(out, " > Scientific age: {} years", sci(u.years, 2))?;
        writeln!(out, " > In cosmic days: {} days", sci(u.cosmic_days, 2))?;
        writeln!(out, " > In divine days: {} days", sci(u.divine_days, 2))?;

        writeln!(out, "\n > In terms of human experience:")?;
        writeln!(out, "   • Complete human lives: {} lives", sci(u.human_lives, 2))?;
        writeln!(out, "   • Human generations: {} generations", sci(u.generations, 2))?;
        writeln!(
            out,
            "   • Written civilization: {:.0} times written history",
            u.written_history_ratio
        )?;
        writeln!(out, "   • Theoretical heartbeats: {} beats", sci(u.heartbeats, 2))
    }

    fn future_projections(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "\n [+] FUTURE PROJECTIONS")?;
        for p in project(self.baseline, &PROJECTION_DELTAS) {
            writeln!(
                out,
                " > In +{:.0} years ({:.0} years total):",
                p.delta_years, p.total_years
            )?;
            writeln!(out, "     Cosmic days: {:.6}", p.scales.days_cosmic())?;
            writeln!(out, "     Divine days: {:.6}", p.scales.days_divine())?;
        }
        Ok(())
    }

    fn temporal_velocity(&self, out: &mut impl Write) -> io::Result<()> {
        let v = temporal_velocity();

        writeln!(out, "\n [+] TEMPORAL VELOCITY ANALYSIS")?;
        writeln!(out, " > Relative temporal velocity:")?;
        writeln!(out, "   1 human second = 1 human second")?;
        writeln!(
            out,
            "   1 human second = {} cosmic seconds",
            sci(v.cosmic_seconds_per_second, 2)
        )?;
        writeln!(
            out,
            "   1 human second = {} divine seconds",
            sci(v.divine_seconds_per_second, 2)
        )?;

        writeln!(out, "\n > Conversion ratios:")?;
        writeln!(out, "   1 cosmic second = {:.0} human years", v.cosmic_second_in_years)?;
        writeln!(out, "   1 divine second = {:.0} human years", v.divine_second_in_years)
    }

    fn textual_references(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "\n [+] TEXTUAL REFERENCES")?;
        write_lines(
            out,
            &[
                " > Quran 22:47 - 'A day with your Lord is like a thousand years'",
                " > Quran 70:4 - 'The angels and the Spirit ascend to Him in a day that lasts fifty thousand years'",
                " > 2 Peter 3:8 - 'A day for the Lord is like a thousand years'",
            ],
        )
    }

    fn closing(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "\n [!] IMPORTANT NOTE")?;
        write_lines(
            out,
            &[
                " This program offers metaphorical and interpretative representations",
                " based on religious texts and traditional historical chronologies.",
                " It should not be considered as factual science or literal cosmology.",
                " All calculations are for educational and contemplative purposes only.",
            ],
        )?;
        writeln!(out)?;
        writeln!(out, "{}", banner_top())?;
        writeln!(out, "{}", banner_line("Analysis Complete"))?;
        writeln!(out, "{}", banner_bottom())
    }
}

/// `Time cosmic: 5 days, 19:46:33`
fn formatted_time(out: &mut impl Write, scale: &str, breakdown: &DayBreakdown) -> io::Result<()> {
    let (days, h, m, s) = breakdown.clock();
    writeln!(out, "Time {scale}: {days:.0} days, {h:02}:{m:02}:{s:02}")
}

fn write_lines(out: &mut impl Write, lines: &[&str]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
