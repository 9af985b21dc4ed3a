//! The overview dashboard: stat cards, the violation trend, and the
//! latest alerts.

use endguard_lib::error::Error;
use endguard_lib::model::{Alert, SeverityTrend, SummaryStats};
use endguard_lib::store::Store;
use tabula::buffer::Buffer;
use tabula::layout::Rect;
use tabula::style::TextStyle;
use tabula::text::{Align, display_width, fit_to_width};
use tabula::theme::{Palette, Tone};

use crate::widgets::statcard;

const RECENT_ALERTS: usize = 5;
const CARD_HEIGHT: u16 = 3;

pub struct DashboardPage {
    stats: SummaryStats,
    trend: SeverityTrend,
    recent: Vec<Alert>,
}

pub async fn load(store: &dyn Store) -> Result<DashboardPage, Error> {
    let stats = store.summary().await?;
    let trend = store.violation_trend().await?;
    let mut recent = store.list_alerts().await?;
    recent.truncate(RECENT_ALERTS);
    Ok(DashboardPage {
        stats,
        trend,
        recent,
    })
}

impl DashboardPage {
    pub fn draw(&self, buf: &mut Buffer, area: Rect, palette: &Palette) {
        if area.is_empty() {
            return;
        }
        buf.put_str(
            area.x,
            area.y,
            "Dashboard",
            palette.text,
            palette.background,
            TextStyle::bold(),
        );

        let mut y = area.y + 2;
        y = self.draw_cards(buf, area, y, palette);
        y = self.draw_trend(buf, area, y + 1, palette);
        self.draw_recent(buf, area, y + 1, palette);
    }

    fn draw_cards(&self, buf: &mut Buffer, area: Rect, y: u16, palette: &Palette) -> u16 {
        if y + CARD_HEIGHT > area.bottom() {
            return y;
        }
        let gap = 2u16;
        let card_w = area.width.saturating_sub(gap * 3) / 4;
        if card_w < 12 {
            return y;
        }

        let s = &self.stats;
        let cards = [
            (
                "Endpoints online",
                format!("{} / {}", s.computers_online, s.computers_total),
                "managed computers",
                Tone::Success,
            ),
            (
                "Open alerts",
                s.open_alerts.to_string(),
                "awaiting triage",
                Tone::Error,
            ),
            (
                "Unresolved violations",
                s.unresolved_violations.to_string(),
                "across all policies",
                Tone::Warning,
            ),
            (
                "Blocked today",
                s.transfers_blocked_today.to_string(),
                "file transfers",
                Tone::Info,
            ),
        ];
        for (i, (label, value, sub, tone)) in cards.iter().enumerate() {
            let x = area.x + (card_w + gap) * i as u16;
            statcard::draw(
                buf,
                Rect::new(x, y, card_w, CARD_HEIGHT),
                label,
                value,
                sub,
                *tone,
                palette,
            );
        }
        y + CARD_HEIGHT
    }

    fn draw_trend(&self, buf: &mut Buffer, area: Rect, mut y: u16, palette: &Palette) -> u16 {
        if y >= area.bottom() {
            return y;
        }
        buf.put_str(
            area.x,
            y,
            "Violations, last 7 days",
            palette.text,
            palette.background,
            TextStyle::bold(),
        );
        y += 1;

        let peak = self.trend.peak();
        let budget = area.width.saturating_sub(14) as usize;
        for day in &self.trend.days {
            if y >= area.bottom() {
                return y;
            }
            let label = day.date.format("%m-%d").to_string();
            buf.put_str(area.x, y, &label, palette.muted, palette.background, TextStyle::new());

            let mut x = area.x + 7;
            let segments = [
                (day.low, palette.info),
                (day.medium, palette.warning),
                (day.high, palette.error),
                (day.critical, palette.error),
            ];
            for (count, color) in segments {
                if count == 0 || peak == 0 {
                    continue;
                }
                let len = ((count * budget) / peak).max(1);
                let bar = "█".repeat(len);
                buf.put_str(x, y, &bar, color, palette.background, TextStyle::new());
                x += len as u16;
            }
            let total = day.total();
            if total > 0 {
                buf.put_str(
                    x + 1,
                    y,
                    &total.to_string(),
                    palette.muted,
                    palette.background,
                    TextStyle::new(),
                );
            }
            y += 1;
        }
        y
    }

    fn draw_recent(&self, buf: &mut Buffer, area: Rect, mut y: u16, palette: &Palette) {
        if y >= area.bottom() {
            return;
        }
        buf.put_str(
            area.x,
            y,
            "Recent alerts",
            palette.text,
            palette.background,
            TextStyle::bold(),
        );
        y += 1;

        if self.recent.is_empty() {
            buf.put_str(
                area.x,
                y,
                "No alerts.",
                palette.muted,
                palette.background,
                TextStyle::new(),
            );
            return;
        }

        for alert in &self.recent {
            if y >= area.bottom() {
                break;
            }
            let severity = alert.severity.to_string();
            let tone = Tone::for_status(&severity);
            buf.put_str(
                area.x,
                y,
                &fit_to_width(&severity, 9, Align::Left),
                palette.tone(tone),
                palette.background,
                TextStyle::bold(),
            );
            buf.put_str(
                area.x + 10,
                y,
                &alert.title,
                palette.text,
                palette.background,
                TextStyle::new(),
            );

            let when = alert.created.format("%Y-%m-%d %H:%M").to_string();
            let w = display_width(&when) as u16;
            if w + 1 < area.width {
                buf.put_str(
                    area.right() - w,
                    y,
                    &when,
                    palette.muted,
                    palette.background,
                    TextStyle::new(),
                );
            }
            y += 1;
        }
    }
}
