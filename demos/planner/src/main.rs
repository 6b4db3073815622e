//! Interactive Pull Planner
//!
//! Terminal front end over the pullplan crates:
//! - Pulls tab: wallet fields, feasibility report, milestone ladder
//! - Crit tab: rate/damage fields scored into a tier gauge
//! - Materials tab: per-character ascension checklist, saved as you type
//!
//! State persists to `pullplan.db` in the working directory. Ctrl-E writes
//! the calculator document next to it; Ctrl-O reads the same file back.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use pullplan_core::{
    group_by_category, BannerOdds, CalculatorInputs, Checklist, CritInputs, CritScore,
    GuaranteeMode, MaterialRequirement, PullReport, Tier, GAUGE_MAX,
};
use pullplan_data::{Catalog, CatalogLoader, Translator};
use pullplan_exchange::{import_file, Exporter, EXPORT_FILE_NAME};
use pullplan_store::{Settings, Store, Theme};
use std::io::{stdout, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Database file, created in the working directory on first run.
const DB_FILE: &str = "pullplan.db";

/// Languages the bundled locale files cover, in Ctrl-L cycle order.
const LANGUAGES: [&str; 2] = ["en", "id"];

/// Width of the crit gauge bar in cells.
const GAUGE_WIDTH: usize = 30;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they stay out of the alternate screen;
    // redirect with `RUST_LOG=debug planner 2> planner.log`.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut app = App::new()?;

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run(&mut stdout, &mut app);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

fn run(stdout: &mut std::io::Stdout, app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        render(stdout, app)?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key.code, key.modifiers)? {
                    return Ok(());
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Pulls,
    Crit,
    Materials,
}

impl Tab {
    fn next(self) -> Self {
        match self {
            Tab::Pulls => Tab::Crit,
            Tab::Crit => Tab::Materials,
            Tab::Materials => Tab::Pulls,
        }
    }
}

struct App {
    store: Store,
    catalog: Catalog,
    locale_dir: Option<PathBuf>,
    translator: Translator,
    settings: Settings,
    tab: Tab,
    calc: CalculatorInputs,
    report: Option<PullReport>,
    calc_field: usize,
    crit: CritInputs,
    crit_field: usize,
    crit_outcome: Option<Result<CritScore, String>>,
    checklist: Checklist,
    material_row: usize,
    search: Option<String>,
    status: Option<String>,
}

impl App {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let store = Store::open(DB_FILE)?;

        // A missing or broken catalog degrades the materials tab to empty
        // instead of refusing to start.
        let catalog = match probe(&["demos/planner/data", "data"]) {
            Some(dir) => {
                let mut loader = CatalogLoader::new();
                match loader.load_directory(&dir) {
                    Ok(()) => loader.finish(),
                    Err(err) => {
                        tracing::warn!(
                            "catalog under {} failed to load ({err}), materials tab will be empty",
                            dir.display()
                        );
                        Catalog::new()
                    }
                }
            }
            None => {
                tracing::warn!("no catalog directory found, materials tab will be empty");
                Catalog::new()
            }
        };

        let settings = store.load_settings()?;

        let locale_dir = probe(&["demos/planner/locales", "locales"]);
        let translator = match &locale_dir {
            Some(dir) => match Translator::load(dir, &settings.language) {
                Ok(translator) => translator,
                Err(err) => {
                    tracing::warn!(
                        "locale {} failed to load ({err}), showing raw keys",
                        settings.language
                    );
                    Translator::empty()
                }
            },
            None => Translator::empty(),
        };

        let calc = store.load_calculator()?;

        // Reopen on the last-viewed character when it is still in the
        // catalog, otherwise the first roster entry.
        let character = settings
            .last_character
            .clone()
            .filter(|name| catalog.contains(name))
            .or_else(|| catalog.character_names().into_iter().next());
        let checklist = match character {
            Some(name) => {
                let owned = store.character(&name).load()?;
                Checklist::with_owned(name, owned)
            }
            None => Checklist::default(),
        };

        Ok(Self {
            store,
            catalog,
            locale_dir,
            translator,
            settings,
            tab: Tab::Pulls,
            calc,
            report: None,
            calc_field: 0,
            crit: CritInputs::default(),
            crit_field: 0,
            crit_outcome: None,
            checklist,
            material_row: 0,
            search: None,
            status: None,
        })
    }

    fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translator.translate(key)
    }

    /// Requirement lines for the active character.
    fn material_requirements(&self) -> &[MaterialRequirement] {
        self.catalog
            .materials_for(&self.checklist.character)
            .unwrap_or(&[])
    }

    /// Requirement lines in display order: grouped by category, original
    /// order inside each group. Row focus and editing index into this.
    fn ordered_requirements(&self) -> Vec<&MaterialRequirement> {
        group_by_category(self.material_requirements())
            .into_iter()
            .flat_map(|(_, lines)| lines)
            .collect()
    }

    /// Returns true when the app should quit.
    fn handle_key(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('c') => return Ok(true),
                KeyCode::Char('t') => self.toggle_theme()?,
                KeyCode::Char('l') => self.cycle_language()?,
                KeyCode::Char('e') => self.export(),
                KeyCode::Char('o') => self.import()?,
                _ => {}
            }
            return Ok(false);
        }

        // Roster search captures everything below this point.
        if self.search.is_some() && self.tab == Tab::Materials {
            return self.handle_search_key(code);
        }

        match code {
            KeyCode::Esc => return Ok(true),
            KeyCode::Tab => {
                self.tab = self.tab.next();
                self.status = None;
            }
            _ => match self.tab {
                Tab::Pulls => self.handle_pulls_key(code)?,
                Tab::Crit => self.handle_crit_key(code),
                Tab::Materials => self.handle_materials_key(code)?,
            },
        }
        Ok(false)
    }

    fn handle_pulls_key(&mut self, code: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        match code {
            KeyCode::Up => self.calc_field = self.calc_field.checked_sub(1).unwrap_or(4),
            KeyCode::Down => self.calc_field = (self.calc_field + 1) % 5,
            KeyCode::Enter => self.calculate()?,
            KeyCode::Left | KeyCode::Right if self.calc_field == 4 => self.toggle_guarantee(),
            KeyCode::Char(' ') if self.calc_field == 4 => self.toggle_guarantee(),
            KeyCode::Backspace => {
                if let Some(field) = self.calc_field_mut() {
                    field.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.calc_field_mut() {
                    field.push(c);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_crit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down => self.crit_field = 1 - self.crit_field,
            KeyCode::Enter => {
                self.crit_outcome = Some(self.crit.evaluate().map_err(|e| e.to_string()));
            }
            KeyCode::Backspace => {
                self.crit_field_mut().pop();
            }
            KeyCode::Char(c) => self.crit_field_mut().push(c),
            _ => {}
        }
    }

    fn handle_materials_key(&mut self, code: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        match code {
            KeyCode::Up => self.material_row = self.material_row.saturating_sub(1),
            KeyCode::Down => {
                let len = self.ordered_requirements().len();
                if self.material_row + 1 < len {
                    self.material_row += 1;
                }
            }
            KeyCode::Left => self.cycle_character(-1)?,
            KeyCode::Right => self.cycle_character(1)?,
            KeyCode::Char('/') => self.search = Some(String::new()),
            KeyCode::Char(c) if c.is_ascii_digit() => self.edit_owned(Some(c))?,
            KeyCode::Backspace => self.edit_owned(None)?,
            _ => {}
        }
        Ok(())
    }

    fn handle_search_key(&mut self, code: KeyCode) -> Result<bool, Box<dyn std::error::Error>> {
        match code {
            KeyCode::Esc => self.search = None,
            KeyCode::Enter => {
                let query = self.search.take().unwrap_or_default();
                if let Some(name) = self.catalog.search(&query).into_iter().next() {
                    self.select_character(name)?;
                }
            }
            KeyCode::Backspace => {
                if let Some(query) = &mut self.search {
                    query.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(query) = &mut self.search {
                    query.push(c);
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn calc_field_mut(&mut self) -> Option<&mut String> {
        match self.calc_field {
            0 => Some(&mut self.calc.gems),
            1 => Some(&mut self.calc.fates),
            2 => Some(&mut self.calc.pity),
            3 => Some(&mut self.calc.target_pulls),
            _ => None,
        }
    }

    fn crit_field_mut(&mut self) -> &mut String {
        if self.crit_field == 0 {
            &mut self.crit.crit_rate
        } else {
            &mut self.crit.crit_damage
        }
    }

    fn toggle_guarantee(&mut self) {
        self.calc.guarantee = match self.calc.guarantee {
            GuaranteeMode::Off => GuaranteeMode::On,
            GuaranteeMode::On => GuaranteeMode::Off,
        };
    }

    /// Derive a fresh report and persist the fields that produced it.
    fn calculate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.report = Some(self.calc.report());
        self.store.save_calculator(&self.calc)?;
        self.status = Some(self.t("status.saved").to_string());
        Ok(())
    }

    fn select_character(&mut self, name: String) -> Result<(), Box<dyn std::error::Error>> {
        let owned = self.store.character(&name).load()?;
        self.checklist = Checklist::with_owned(name.clone(), owned);
        self.material_row = 0;
        self.settings.last_character = Some(name);
        self.store.save_settings(&self.settings)?;
        Ok(())
    }

    fn cycle_character(&mut self, step: isize) -> Result<(), Box<dyn std::error::Error>> {
        let roster = self.catalog.character_names();
        if roster.is_empty() {
            return Ok(());
        }
        let current = roster
            .iter()
            .position(|name| *name == self.checklist.character)
            .unwrap_or(0);
        let next = (current as isize + step).rem_euclid(roster.len() as isize) as usize;
        self.select_character(roster[next].clone())
    }

    /// Apply one keystroke to the focused material's owned count and save
    /// the character's row.
    fn edit_owned(&mut self, push: Option<char>) -> Result<(), Box<dyn std::error::Error>> {
        let name = {
            let ordered = self.ordered_requirements();
            match ordered.get(self.material_row) {
                Some(requirement) => requirement.name.clone(),
                None => return Ok(()),
            }
        };

        let current = self.checklist.owned(&name);
        let mut text = if current == 0 {
            String::new()
        } else {
            current.to_string()
        };
        match push {
            Some(c) => text.push(c),
            None => {
                text.pop();
            }
        }

        self.checklist.set_owned(name, &text);
        self.store
            .character(&self.checklist.character)
            .save(&self.checklist.owned)?;
        Ok(())
    }

    fn toggle_theme(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.settings.theme = self.settings.theme.toggled();
        self.store.save_settings(&self.settings)?;
        Ok(())
    }

    fn cycle_language(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let Some(dir) = self.locale_dir.clone() else {
            self.status = Some("no locale directory found".to_string());
            return Ok(());
        };

        let current = LANGUAGES
            .iter()
            .position(|lang| *lang == self.settings.language)
            .unwrap_or(0);
        let next = LANGUAGES[(current + 1) % LANGUAGES.len()];

        // A failed switch keeps the current strings on screen.
        if self.translator.switch(&dir, next) {
            self.settings.language = next.to_string();
            self.store.save_settings(&self.settings)?;
        } else {
            self.status = Some(format!("locale {next} unavailable"));
        }
        Ok(())
    }

    fn export(&mut self) {
        match Exporter::new(&self.calc).write_file(".") {
            Ok(path) => {
                self.status = Some(format!("{} {}", self.t("status.exported"), path.display()));
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    /// Read the exported document back from the working directory. The
    /// failure message names the file; current fields stay untouched.
    fn import(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        match import_file(EXPORT_FILE_NAME) {
            Ok(state) => {
                self.calc = state;
                self.report = None;
                self.store.save_calculator(&self.calc)?;
                self.status = Some(self.t("status.imported").to_string());
            }
            Err(err) => self.status = Some(err.to_string()),
        }
        Ok(())
    }
}

fn probe(paths: &[&str]) -> Option<PathBuf> {
    paths
        .iter()
        .map(Path::new)
        .find(|path| path.is_dir())
        .map(Path::to_path_buf)
}

fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Blue,
        Theme::Dark => Color::Cyan,
    }
}

fn dim(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::DarkGrey,
        Theme::Dark => Color::Grey,
    }
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Skip => Color::DarkGrey,
        Tier::Common => Color::Grey,
        Tier::Uncommon => Color::Green,
        Tier::Rare => Color::Blue,
        Tier::Epic => Color::Magenta,
        Tier::Legendary => Color::Yellow,
        Tier::God => Color::Red,
    }
}

fn render(stdout: &mut std::io::Stdout, app: &App) -> Result<(), Box<dyn std::error::Error>> {
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    render_header(stdout, app)?;
    match app.tab {
        Tab::Pulls => render_pulls(stdout, app)?,
        Tab::Crit => render_crit(stdout, app)?,
        Tab::Materials => render_materials(stdout, app)?,
    }
    render_footer(stdout, app)?;

    stdout.flush()?;
    Ok(())
}

fn render_header(stdout: &mut std::io::Stdout, app: &App) -> Result<(), Box<dyn std::error::Error>> {
    let accent = accent(app.settings.theme);

    execute!(
        stdout,
        SetForegroundColor(accent),
        Print(format!("=== {} ===\n\n", app.t("app.title"))),
        ResetColor
    )?;

    for (tab, key) in [
        (Tab::Pulls, "tab.pulls"),
        (Tab::Crit, "tab.crit"),
        (Tab::Materials, "tab.materials"),
    ] {
        if app.tab == tab {
            execute!(
                stdout,
                SetBackgroundColor(accent),
                SetForegroundColor(Color::Black),
                Print(format!(" {} ", app.t(key))),
                ResetColor,
                Print(" ")
            )?;
        } else {
            execute!(stdout, Print(format!(" {}  ", app.t(key))))?;
        }
    }

    execute!(
        stdout,
        SetForegroundColor(dim(app.settings.theme)),
        Print(format!(
            "   [{} | {}]\n\n",
            app.settings.language,
            app.settings.theme.as_str()
        )),
        ResetColor
    )?;
    Ok(())
}

fn render_field(
    stdout: &mut std::io::Stdout,
    app: &App,
    label: &str,
    value: &str,
    focused: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    execute!(stdout, Print(format!("  {:<16} ", format!("{label}:"))))?;
    if focused {
        execute!(
            stdout,
            SetBackgroundColor(accent(app.settings.theme)),
            SetForegroundColor(Color::Black),
            Print(format!("{value:<14}")),
            ResetColor,
            Print("\n")
        )?;
    } else {
        execute!(stdout, Print(format!("{value:<14}\n")))?;
    }
    Ok(())
}

fn render_pulls(stdout: &mut std::io::Stdout, app: &App) -> Result<(), Box<dyn std::error::Error>> {
    let guarantee_label = match app.calc.guarantee {
        GuaranteeMode::On => app.t("guarantee.on"),
        GuaranteeMode::Off => app.t("guarantee.off"),
    };
    let fields = [
        (app.t("field.gems"), app.calc.gems.as_str()),
        (app.t("field.fates"), app.calc.fates.as_str()),
        (app.t("field.pity"), app.calc.pity.as_str()),
        (app.t("field.target"), app.calc.target_pulls.as_str()),
        (app.t("field.guarantee"), guarantee_label),
    ];
    for (index, (label, value)) in fields.into_iter().enumerate() {
        render_field(stdout, app, label, value, app.calc_field == index)?;
    }

    let Some(report) = &app.report else {
        return Ok(());
    };

    execute!(stdout, Print("\n"))?;
    execute!(
        stdout,
        Print(format!("  {:<20} {}\n", app.t("label.required"), report.required_gems)),
        Print(format!("  {:<20} {}\n", app.t("label.shortfall"), report.shortfall)),
        Print(format!("  {:<20} {}\n", app.t("label.convertible"), report.convertible_pulls)),
        Print(format!("  {:<20} {}\n", app.t("label.surplus"), report.surplus_pulls))
    )?;

    if report.feasible {
        execute!(
            stdout,
            SetForegroundColor(Color::Green),
            Print(format!("  {}\n", app.t("label.feasible"))),
            ResetColor
        )?;
    } else {
        execute!(
            stdout,
            SetForegroundColor(Color::Red),
            Print(format!("  {}\n", app.t("label.infeasible"))),
            ResetColor
        )?;
    }

    execute!(stdout, Print(format!("\n  {}:\n", app.t("label.milestones"))))?;
    for milestone in &report.milestones {
        match milestone.odds {
            Some(odds) => {
                let odds_label = match odds {
                    BannerOdds::Guaranteed => app.t("odds.guaranteed"),
                    BannerOdds::FiftyFifty => app.t("odds.fifty"),
                };
                execute!(
                    stdout,
                    SetForegroundColor(Color::Green),
                    Print(format!(
                        "    {:>3}  {} ({odds_label})\n",
                        milestone.pulls,
                        app.t("label.reachable")
                    )),
                    ResetColor
                )?;
            }
            None => {
                execute!(
                    stdout,
                    SetForegroundColor(dim(app.settings.theme)),
                    Print(format!(
                        "    {:>3}  {}\n",
                        milestone.pulls,
                        app.t("label.out_of_reach")
                    )),
                    ResetColor
                )?;
            }
        }
    }
    Ok(())
}

fn render_crit(stdout: &mut std::io::Stdout, app: &App) -> Result<(), Box<dyn std::error::Error>> {
    render_field(stdout, app, app.t("crit.rate"), &app.crit.crit_rate, app.crit_field == 0)?;
    render_field(stdout, app, app.t("crit.damage"), &app.crit.crit_damage, app.crit_field == 1)?;

    match &app.crit_outcome {
        Some(Ok(score)) => {
            execute!(
                stdout,
                Print(format!(
                    "\n  {}: {:.2}   {}: ",
                    app.t("crit.value"),
                    score.value,
                    app.t("crit.tier")
                )),
                SetForegroundColor(tier_color(score.tier)),
                Print(format!("{}\n\n", score.tier)),
                ResetColor
            )?;

            // Gauge is clamped for drawing; the value above is not.
            let filled = ((score.gauge() / GAUGE_MAX) * GAUGE_WIDTH as f64).round() as usize;
            execute!(
                stdout,
                Print("  "),
                SetBackgroundColor(tier_color(score.tier)),
                Print(" ".repeat(filled)),
                SetBackgroundColor(Color::DarkGrey),
                Print(" ".repeat(GAUGE_WIDTH - filled)),
                ResetColor,
                Print(format!(" {:.0}/{:.0}\n", score.gauge(), GAUGE_MAX))
            )?;

            execute!(stdout, Print(format!("\n  {}:\n", app.t("crit.ladder"))))?;
            for tier in Tier::ALL {
                let marker = if tier == score.tier { '>' } else { ' ' };
                let line = format!("  {marker} {:>2.0}+  {tier}", tier.threshold());
                if tier == score.tier {
                    execute!(
                        stdout,
                        SetForegroundColor(tier_color(tier)),
                        Print(line),
                        ResetColor,
                        Print("\n")
                    )?;
                } else {
                    execute!(
                        stdout,
                        SetForegroundColor(dim(app.settings.theme)),
                        Print(line),
                        ResetColor,
                        Print("\n")
                    )?;
                }
            }
        }
        Some(Err(message)) => {
            execute!(
                stdout,
                Print("\n  "),
                SetForegroundColor(Color::Red),
                Print(format!("{message}\n")),
                ResetColor
            )?;
        }
        None => {}
    }
    Ok(())
}

fn render_materials(
    stdout: &mut std::io::Stdout,
    app: &App,
) -> Result<(), Box<dyn std::error::Error>> {
    if app.catalog.is_empty() {
        execute!(
            stdout,
            SetForegroundColor(dim(app.settings.theme)),
            Print(format!("  {}\n", app.t("materials.none"))),
            ResetColor
        )?;
        return Ok(());
    }

    // Search mode replaces the list until picked or cancelled.
    if let Some(query) = &app.search {
        execute!(
            stdout,
            Print(format!("  {}: {query}_\n\n", app.t("search.prompt")))
        )?;
        for name in app.catalog.search(query).iter().take(8) {
            execute!(stdout, Print(format!("    {name}\n")))?;
        }
        return Ok(());
    }

    let roster = app.catalog.character_names();
    let position = roster
        .iter()
        .position(|name| *name == app.checklist.character)
        .map(|index| index + 1)
        .unwrap_or(0);
    execute!(
        stdout,
        Print(format!(
            "  {}: < {} >   ({position}/{})\n",
            app.t("materials.character"),
            app.checklist.character,
            roster.len()
        ))
    )?;

    let requirements = app.material_requirements();
    let summary = app.checklist.summary(requirements);
    execute!(
        stdout,
        Print(format!(
            "  {}: {}/{} ({}%)\n\n",
            app.t("materials.progress"),
            summary.completed,
            summary.total,
            summary.percentage
        ))
    )?;
    if summary.is_all_collected() {
        execute!(
            stdout,
            SetForegroundColor(Color::Green),
            Print(format!("  {}\n\n", app.t("materials.all"))),
            ResetColor
        )?;
    }

    let mut last_category: Option<&str> = None;
    for (index, requirement) in app.ordered_requirements().into_iter().enumerate() {
        if last_category != Some(requirement.category.as_str()) {
            last_category = Some(requirement.category.as_str());
            if !requirement.category.is_empty() {
                execute!(
                    stdout,
                    SetForegroundColor(accent(app.settings.theme)),
                    Print(format!("  {}\n", requirement.category)),
                    ResetColor
                )?;
            }
        }

        let owned = app.checklist.owned(&requirement.name);
        let focused = index == app.material_row;
        let marker = if focused { '>' } else { ' ' };
        let tail = if app.checklist.is_complete_for(requirement) {
            app.t("materials.done").to_string()
        } else {
            format!(
                "{} {}",
                app.checklist.remaining_for(requirement),
                app.t("materials.more")
            )
        };
        let line = format!(
            "  {marker} {:<26} {:>4} / {:<4} {tail}",
            requirement.name, owned, requirement.required
        );

        if focused {
            execute!(
                stdout,
                SetBackgroundColor(accent(app.settings.theme)),
                SetForegroundColor(Color::Black),
                Print(line),
                ResetColor,
                Print("\n")
            )?;
        } else if app.checklist.is_complete_for(requirement) {
            execute!(
                stdout,
                SetForegroundColor(Color::Green),
                Print(line),
                ResetColor,
                Print("\n")
            )?;
        } else {
            execute!(stdout, Print(line), Print("\n"))?;
        }
    }
    Ok(())
}

fn render_footer(stdout: &mut std::io::Stdout, app: &App) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(status) = &app.status {
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Color::Yellow),
            Print(format!("  {status}\n")),
            ResetColor
        )?;
    }

    let help = match app.tab {
        Tab::Materials => app.t("help.materials"),
        _ => app.t("help.main"),
    };
    execute!(
        stdout,
        Print("\n"),
        SetForegroundColor(dim(app.settings.theme)),
        Print(format!("  {help}\n")),
        ResetColor
    )?;
    Ok(())
}
