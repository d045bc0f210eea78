//! Section renderers
//!
//! One function per page section, each appending rows to the builder.

use folio_core::content::{
    self, Section, Service, CERTS, CONTACT_LINKS, CONTACT_STATUS, FOOTER, HERO_AVAILABILITY,
    HERO_DESCRIPTOR, HERO_LABEL, HERO_NAME, HERO_ROLE, PRINCIPLES, PROJECTS, RUNTIME_LOG,
    SERVICES, STACK_LAYERS, TERMINAL_TITLE, TOPOLOGY_EDGES, TOPOLOGY_NODES, VOLUNTEER,
};
use folio_core::typewriter::{caret_on, CARET};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use super::{fit, gallery, DocumentBuilder, PageSnapshot, Target};
use crate::theme;

// ============================================================================
// Hero
// ============================================================================

pub(super) fn hero(b: &mut DocumentBuilder, snap: &PageSnapshot<'_>) {
    let width = usize::from(b.width());

    let left = "NODE_01 ──── ONLINE";
    let right = "REGION: IN-SOUTH-01";
    let gap = width.saturating_sub(left.width() + right.width());
    b.push(vec![
        Span::styled("NODE_01 ──── ", theme::faint()),
        Span::styled("ONLINE", Style::default().fg(theme::AMBER_DIM).bg(theme::CHARCOAL)),
        Span::styled(" ".repeat(gap), theme::text()),
        Span::styled(right, theme::faint()),
    ]);
    b.blank();

    b.push(vec![
        Span::styled("▌▌▌ ", Style::default().fg(theme::AMBER).bg(theme::CHARCOAL)),
        Span::styled(HERO_LABEL, Style::default().fg(theme::AMBER_DIM).bg(theme::CHARCOAL)),
    ]);
    b.blank();
    b.push(vec![Span::styled(HERO_NAME, theme::heading(theme::CREAM))]);
    b.push(vec![Span::styled(HERO_ROLE, theme::heading(theme::AMBER))]);
    b.blank();
    for paragraph in HERO_DESCRIPTOR {
        b.wrapped(paragraph, theme::dim(), 0);
    }
    b.blank();
    b.push(vec![
        Span::styled("● ", Style::default().fg(theme::MOSS).bg(theme::CHARCOAL)),
        Span::styled(HERO_AVAILABILITY, Style::default().fg(theme::MOSS).bg(theme::CHARCOAL)),
    ]);
    b.blank();

    boot_terminal(b, snap);
}

fn boot_terminal(b: &mut DocumentBuilder, snap: &PageSnapshot<'_>) {
    let outer = usize::from(b.width()).min(64);
    let inner = outer.saturating_sub(4);
    let border = Style::default().fg(theme::CREAM_FAINT).bg(theme::CHARCOAL_2);
    let fill = Style::default().bg(theme::CHARCOAL_2);

    let title = format!(" {} ", TERMINAL_TITLE);
    let dashes = outer.saturating_sub(title.width() + 9);
    b.push(vec![
        Span::styled("┌─", border),
        Span::styled("●", Style::default().fg(theme::RUST).bg(theme::CHARCOAL_2)),
        Span::styled("●", Style::default().fg(theme::AMBER_DIM).bg(theme::CHARCOAL_2)),
        Span::styled("●", Style::default().fg(theme::MOSS).bg(theme::CHARCOAL_2)),
        Span::styled("─", border),
        Span::styled(title, Style::default().fg(theme::CREAM_DIM).bg(theme::CHARCOAL_2)),
        Span::styled("─".repeat(dashes), border),
        Span::styled("─┐", border),
    ]);

    let blink = caret_on(snap.now);
    for line in snap.terminal.lines() {
        let color = theme::line_color(line.style);
        let mut text = line.shown.to_string();
        if line.show_caret() && blink {
            text.push(CARET);
        }
        b.push(vec![
            Span::styled("│ ", border),
            Span::styled(fit(&text, inner), Style::default().fg(color).bg(theme::CHARCOAL_2)),
            Span::styled(" │", border),
        ]);
    }
    b.push(vec![
        Span::styled("│ ", border),
        Span::styled(" ".repeat(inner), fill),
        Span::styled(" │", border),
    ]);
    b.push(vec![Span::styled(format!("└{}┘", "─".repeat(outer.saturating_sub(2))), border)]);
}

// ============================================================================
// Systems
// ============================================================================

pub(super) fn systems(b: &mut DocumentBuilder) {
    b.section_header(Section::Systems);
    b.wrapped(
        "Principles that hold from the first design doc to the last on-call page.",
        theme::dim(),
        0,
    );
    b.blank();

    for principle in &PRINCIPLES {
        let color = theme::accent(principle.accent);
        b.push(vec![
            Span::styled(format!("{}  ", principle.code), Style::default().fg(color).bg(theme::CHARCOAL)),
            Span::styled(principle.title, theme::heading(color)),
        ]);
        b.wrapped(principle.body, theme::dim(), 6);
        b.blank();
    }

    b.push(vec![Span::styled("SYSTEM TOPOLOGY / SIMPLIFIED", theme::faint())]);
    for (from, to) in TOPOLOGY_EDGES {
        let (Some(from), Some(to)) = (TOPOLOGY_NODES.get(from), TOPOLOGY_NODES.get(to)) else {
            continue;
        };
        b.push(vec![
            Span::styled("  ", theme::text()),
            Span::styled(fit(from, 12), Style::default().fg(theme::STEEL).bg(theme::CHARCOAL)),
            Span::styled(" ──▶ ", theme::faint()),
            Span::styled(*to, Style::default().fg(theme::STEEL).bg(theme::CHARCOAL)),
        ]);
    }
}

// ============================================================================
// Projects
// ============================================================================

pub(super) fn projects(b: &mut DocumentBuilder, snap: &PageSnapshot<'_>) {
    b.section_header(Section::Projects);
    b.wrapped(
        "Production-grade systems. Each one built to survive failure.",
        theme::dim(),
        0,
    );
    b.blank();

    for (index, project) in PROJECTS.iter().enumerate() {
        let color = theme::accent(project.accent);
        let focused = snap.focused_project == Some(index);
        let expanded = snap.expanded.get(index).copied().unwrap_or(false);

        b.mark_project();
        let marker = if focused { "▶ " } else { "  " };
        let badge = format!("[{}]", project.status);
        let header_row = b.row();
        let header = vec![
            Span::styled(marker, Style::default().fg(theme::AMBER).bg(theme::CHARCOAL)),
            Span::styled(project.name, theme::heading(theme::CREAM)),
            Span::styled("  ", theme::text()),
            Span::styled(badge, Style::default().fg(color).bg(theme::CHARCOAL)),
            Span::styled(format!("  {}  ", project.version), theme::faint()),
            Span::styled(format!("UPTIME {}", project.uptime), theme::dim()),
        ];
        let header_width = super::spans_width(&header);
        b.push(header);
        b.hotspot(header_row..header_row + 1, 0..header_width as u16, Target::Project(index));

        b.push(vec![
            Span::styled("  ", theme::text()),
            Span::styled(project.subtitle, Style::default().fg(color).bg(theme::CHARCOAL)),
        ]);
        b.push(vec![Span::styled(format!("  {}", project.class), theme::faint())]);
        b.wrapped(project.description, theme::dim(), 2);
        b.wrapped(&format!("stack: {}", project.stack.join(" · ")), theme::faint(), 2);

        let toggle = if expanded { "▾" } else { "▸" };
        let hint = if focused { "  [enter]" } else { "" };
        b.push(vec![
            Span::styled(
                format!("  {} MODULES ({})", toggle, project.modules.len()),
                Style::default().fg(theme::CREAM_DIM).bg(theme::CHARCOAL).add_modifier(Modifier::BOLD),
            ),
            Span::styled(hint, theme::faint()),
        ]);
        if expanded {
            for module in project.modules {
                b.push(vec![
                    Span::styled("    ● ", Style::default().fg(theme::MOSS).bg(theme::CHARCOAL)),
                    Span::styled(fit(module.name, 18), theme::text()),
                    Span::styled(module.detail, theme::dim()),
                ]);
            }
        }
        b.wrapped(&format!("» {}", project.highlight), Style::default().fg(theme::AMBER_DIM).bg(theme::CHARCOAL), 2);
        b.blank();
    }
}

// ============================================================================
// Stack
// ============================================================================

pub(super) fn stack(b: &mut DocumentBuilder) {
    b.section_header(Section::Stack);

    for layer in STACK_LAYERS.iter().rev() {
        let color = theme::accent(layer.accent);
        b.push(vec![
            Span::styled(format!("{} │ ", layer.code), Style::default().fg(color).bg(theme::CHARCOAL)),
            Span::styled(fit(layer.name, 22), theme::heading(color)),
            Span::styled(" │ ", theme::faint()),
        ]);
        b.wrapped(&layer.items.join(" · "), theme::text(), 5);
    }
    b.blank();

    b.push(vec![Span::styled("CERTIFICATIONS", theme::heading(theme::CREAM_DIM))]);
    for cert in &CERTS {
        b.push(vec![
            Span::styled("  ◆ ", Style::default().fg(theme::AMBER_DIM).bg(theme::CHARCOAL)),
            Span::styled(cert.name, theme::text()),
            Span::styled(format!("  {}", cert.issuer), theme::faint()),
        ]);
    }
}

// ============================================================================
// Parallel processes
// ============================================================================

pub(super) fn processes(b: &mut DocumentBuilder, snap: &PageSnapshot<'_>) {
    b.section_header(Section::Processes);
    b.wrapped(
        "Concurrent services: leadership and volunteering running alongside core engineering systems.",
        theme::dim(),
        0,
    );
    b.blank();

    let active = SERVICES.iter().filter(|s| s.is_active()).count();
    b.push(vec![
        Span::styled(format!("● {} ACTIVE", active), Style::default().fg(theme::MOSS).bg(theme::CHARCOAL)),
        Span::styled(format!("   ○ {} ARCHIVED", SERVICES.len() - active), theme::faint()),
    ]);
    b.blank();

    for (index, service) in SERVICES.iter().enumerate() {
        let uptime = snap.uptimes.get(index).copied().flatten();
        service_card(b, service, uptime);
    }

    b.push(vec![Span::styled("VOLUNTEER OPS", theme::heading(theme::CREAM_DIM))]);
    service_card(b, &VOLUNTEER, None);
}

fn service_card(b: &mut DocumentBuilder, service: &Service, uptime: Option<&str>) {
    let color = if service.is_active() {
        theme::accent(service.accent)
    } else {
        theme::CREAM_DIM
    };

    b.push(vec![
        Span::styled(format!("{}  ", service.pid), theme::faint()),
        Span::styled(format!("[{}] ", service.status.label()), Style::default().fg(color).bg(theme::CHARCOAL)),
        Span::styled(service.name, theme::heading(theme::CREAM)),
    ]);
    b.push(vec![
        Span::styled("         ", theme::text()),
        Span::styled(format!("{} · {}", service.org, service.scope), theme::dim()),
    ]);

    let mut tail = vec![
        Span::styled("         ", theme::text()),
        Span::styled(service.period, theme::faint()),
    ];
    if let Some(uptime) = uptime {
        tail.push(Span::styled("   UPTIME ", theme::faint()));
        tail.push(Span::styled(uptime.to_string(), Style::default().fg(theme::MOSS).bg(theme::CHARCOAL)));
    }
    b.push(tail);
    b.blank();
}

// ============================================================================
// Human layer
// ============================================================================

pub(super) fn human(b: &mut DocumentBuilder, snap: &PageSnapshot<'_>) {
    b.section_header(Section::Human);
    b.push(vec![Span::styled("RUNTIME LOG", theme::heading(theme::CREAM_DIM))]);

    for (index, entry) in RUNTIME_LOG.iter().enumerate() {
        let color = theme::accent(entry.accent);
        b.push(vec![
            Span::styled(format!("{:03} ", index), theme::faint()),
            Span::styled(fit(&format!("[{}]", entry.level), 10), Style::default().fg(color).bg(theme::CHARCOAL)),
            Span::styled(entry.message, theme::text()),
            Span::styled(format!("  {}", entry.meta), theme::faint()),
        ]);
    }
    b.blank();

    b.push(vec![Span::styled(
        format!("MEMORY CLUSTER · {} FRAMES", content::PHOTO_COUNT),
        theme::heading(theme::CREAM_DIM),
    )]);
    gallery::render(b, snap);
}

// ============================================================================
// Contact
// ============================================================================

pub(super) fn contact(b: &mut DocumentBuilder, snap: &PageSnapshot<'_>) {
    b.section_header(Section::Contact);
    b.wrapped("Backend & systems engineering, architecture to production.", theme::dim(), 0);
    b.blank();

    for (label, value) in CONTACT_STATUS {
        b.push(vec![
            Span::styled("● ", Style::default().fg(theme::MOSS).bg(theme::CHARCOAL)),
            Span::styled(fit(label, 10), theme::faint()),
            Span::styled(value, theme::text()),
        ]);
    }
    b.blank();

    for link in &CONTACT_LINKS {
        b.push(vec![
            Span::styled(format!("{} ", link.icon), Style::default().fg(theme::AMBER).bg(theme::CHARCOAL)),
            Span::styled(fit(link.label, 10), theme::faint()),
            Span::styled(link.value, theme::text()),
        ]);
    }
    b.blank();

    let button = format!("[ {} ]", snap.copy_label);
    let style = if snap.copied {
        Style::default().fg(theme::CHARCOAL).bg(theme::MOSS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::AMBER).bg(theme::CHARCOAL_2).add_modifier(Modifier::BOLD)
    };
    let row = b.row();
    let cols = button.width() as u16;
    b.push(vec![Span::styled(button, style)]);
    b.hotspot(row..row + 1, 0..cols, Target::CopyEmail);
    b.push(vec![Span::styled("press c to copy", theme::faint())]);
    b.blank();

    for line in FOOTER {
        b.push(vec![Span::styled(line, theme::faint())]);
    }
}
