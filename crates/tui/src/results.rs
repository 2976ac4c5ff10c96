//! Result area content.
//!
//! Responsibilities:
//! - Turn a classified [`ProvisioningOutcome`] into an ordered list of
//!   [`Section`]s (tables, verbatim text, banners, command blocks).
//! - Expose the search table for CSV export and the command block for copy.
//!
//! Does NOT handle:
//! - Drawing (see `ui::results`).
//! - Response classification (done once, in the client crate).
//!
//! Invariants:
//! - Building a view is pure; a new view fully replaces the previous one.
//! - Text outcomes are kept verbatim, whitespace included.

use zayavki_client::{
    CheckResult, Cluster, DeactivationOutcome, ProvisioningOutcome, QuotaUpdateOutcome,
    TenantInfo, TenantResources,
};

use crate::forms::registry::TabId;

pub const SEARCH_TITLE: &str = "Результаты поиска";
pub const NO_RESULTS: &str = "No results found";

pub const SEARCH_HEADER: [&str; 17] = [
    "Active",
    "Cluster",
    "Segment",
    "Environment",
    "Realm",
    "Tenant",
    "User",
    "Bucket",
    "Quota",
    "SD",
    "SRT",
    "Date",
    "RIS Code",
    "RIS ID",
    "Owner Group",
    "Owner",
    "Applicant",
];

pub const COPY_LABEL: &str = "Копировать";
pub const COPIED_LABEL: &str = "Скопировано!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Table {
        title: String,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        exportable: bool,
    },
    /// Verbatim text.
    Text { title: Option<String>, body: String },
    Banner {
        tone: BannerTone,
        title: String,
        text: String,
    },
    Commands {
        title: String,
        text: String,
        copyable: bool,
    },
    /// One line per entry, error-styled.
    Errors { title: String, items: Vec<String> },
    /// Operation failure shown in place of a result.
    Failure(String),
}

/// Everything the result area shows for the last operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultView {
    pub sections: Vec<Section>,
}

fn table(title: &str, header: &[&str], rows: Vec<Vec<String>>) -> Section {
    Section::Table {
        title: title.to_string(),
        header: header.iter().map(|h| h.to_string()).collect(),
        rows,
        exportable: false,
    }
}

impl ResultView {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn text(body: impl Into<String>) -> Self {
        Self {
            sections: vec![Section::Text {
                title: None,
                body: body.into(),
            }],
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            sections: vec![Section::Failure(message.into())],
        }
    }

    /// Build the view for an outcome produced on `tab`.
    pub fn from_outcome(tab: TabId, outcome: &ProvisioningOutcome) -> Self {
        let copyable = matches!(tab, TabId::TenantMod | TabId::BucketMod);
        let sections = match outcome {
            ProvisioningOutcome::Text(text) => {
                return Self::text(text.clone());
            }
            ProvisioningOutcome::Search(rows) => search_sections(rows),
            ProvisioningOutcome::ClusterDetails(cluster) => vec![cluster_section(cluster)],
            ProvisioningOutcome::TenantResources(resources)
            | ProvisioningOutcome::TenantCheck { resources, .. } => {
                resource_sections(resources, copyable)
            }
            ProvisioningOutcome::TenantSubmission { info, text } => vec![Section::Text {
                title: None,
                body: tenant_submission_text(info, text),
            }],
            ProvisioningOutcome::Deactivation(outcome) => deactivation_sections(outcome),
            ProvisioningOutcome::QuotaUpdate(outcome) => quota_sections(outcome),
        };
        Self { sections }
    }

    /// Append the detail of the cluster a search was narrowed to.
    pub fn push_cluster_details(&mut self, cluster: &Cluster) {
        self.sections.push(cluster_section(cluster));
    }

    /// Header and rows of the exportable search table, if shown.
    pub fn export_table(&self) -> Option<(&[String], &[Vec<String>])> {
        self.sections.iter().find_map(|section| match section {
            Section::Table {
                header,
                rows,
                exportable: true,
                ..
            } => Some((header.as_slice(), rows.as_slice())),
            _ => None,
        })
    }

    /// Command text offered for copy on this view.
    pub fn copyable_commands(&self) -> Option<&str> {
        self.sections.iter().find_map(|section| match section {
            Section::Commands {
                text,
                copyable: true,
                ..
            } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Plain-text rendering, used for scroll bounds and tests.
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for section in &self.sections {
            match section {
                Section::Table {
                    title, header, rows, ..
                } => {
                    lines.push(title.clone());
                    lines.push(header.join(" | "));
                    lines.extend(rows.iter().map(|row| row.join(" | ")));
                }
                Section::Text { title, body } => {
                    lines.extend(title.iter().cloned());
                    lines.extend(body.lines().map(str::to_string));
                }
                Section::Banner { title, text, .. } => {
                    lines.push(title.clone());
                    lines.push(text.clone());
                }
                Section::Commands { title, text, .. } => {
                    lines.push(title.clone());
                    lines.extend(text.lines().map(str::to_string));
                }
                Section::Errors { title, items } => {
                    lines.push(title.clone());
                    lines.extend(items.iter().cloned());
                }
                Section::Failure(message) => lines.push(message.clone()),
            }
            lines.push(String::new());
        }
        lines
    }
}

/// Cells of one search row, in [`SEARCH_HEADER`] order.
pub fn search_row(result: &CheckResult) -> Vec<String> {
    let active = if result.active { "✓" } else { "✗" };
    let cells: [&str; 17] = [
        active,
        &result.cluster,
        &result.segment,
        &result.environment,
        &result.realm,
        &result.tenant,
        &result.user,
        &result.bucket,
        &result.quota,
        &result.sd_num,
        &result.srt_num,
        &result.done_date,
        &result.ris_code,
        &result.ris_id,
        &result.owner_group,
        &result.owner,
        &result.applicant,
    ];
    cells.iter().map(|cell| cell.to_string()).collect()
}

fn search_sections(rows: &[CheckResult]) -> Vec<Section> {
    if rows.is_empty() {
        return vec![Section::Text {
            title: None,
            body: NO_RESULTS.to_string(),
        }];
    }
    vec![Section::Table {
        title: SEARCH_TITLE.to_string(),
        header: SEARCH_HEADER.iter().map(|h| h.to_string()).collect(),
        rows: rows.iter().map(search_row).collect(),
        exportable: true,
    }]
}

fn cluster_section(cluster: &Cluster) -> Section {
    let body = cluster
        .attributes()
        .iter()
        .map(|(caption, value)| format!("{caption}: {value}"))
        .collect::<Vec<_>>()
        .join("\n");
    Section::Text {
        title: Some(format!("Информация о кластере {}", cluster.name)),
        body,
    }
}

fn resource_sections(resources: &TenantResources, copyable: bool) -> Vec<Section> {
    let tenant = &resources.tenant;
    let mut sections = vec![table(
        "Информация о тенанте",
        &[
            "Тенант",
            "Кластер",
            "Среда",
            "Зона безопасности",
            "РИС код",
            "РИС номер",
            "Группа владельцев",
            "Владелец",
        ],
        vec![vec![
            tenant.name.clone(),
            tenant.cluster.clone(),
            tenant.env.clone(),
            tenant.segment.clone(),
            tenant.ris_code.clone(),
            tenant.ris_id.clone(),
            tenant.owner_group.clone(),
            tenant.owner.clone(),
        ]],
    )];

    if !resources.users.is_empty() {
        sections.push(table(
            "Пользователи",
            &["Пользователь", "Статус"],
            resources
                .users
                .iter()
                .map(|u| vec![u.name.clone(), u.status.clone()])
                .collect(),
        ));
    }

    if !resources.buckets.is_empty() {
        sections.push(table(
            "Бакеты",
            &["Бакет", "Размер", "Статус"],
            resources
                .buckets
                .iter()
                .map(|b| vec![b.name.clone(), b.size.clone(), b.status.clone()])
                .collect(),
        ));
    }

    if let Some(commands) = &resources.commands {
        sections.push(Section::Commands {
            title: commands.kind.title().to_string(),
            text: commands.text.clone(),
            copyable,
        });
    }
    sections
}

/// Tenant info header followed by the submission text.
pub fn tenant_submission_text(info: &TenantInfo, text: &str) -> String {
    format!(
        "Информация о тенанте {}:\n\
         Кластер: {}\n\
         Сегмент: {}\n\
         Среда: {}\n\
         Реалм: {}\n\
         РИС код: {}\n\
         РИС номер: {}\n\
         Группа владельцев: {}\n\
         Владелец: {}\n\
         \n\
         Результат проверки:\n\
         {}",
        info.tenant,
        info.cls_name,
        info.net_seg,
        info.env,
        info.realm,
        info.ris_code,
        info.ris_id,
        info.owner_group,
        info.owner_person,
        text
    )
}

fn deactivation_sections(outcome: &DeactivationOutcome) -> Vec<Section> {
    if outcome.is_noop() {
        return vec![Section::Banner {
            tone: BannerTone::Info,
            title: "Результат операции".to_string(),
            text: "Указанные пользователи и бакеты не были найдены в системе или уже деактивированы."
                .to_string(),
        }];
    }

    let mut sections = Vec::new();
    if !outcome.deactivated_users.is_empty() {
        sections.push(table(
            "Деактивированные пользователи",
            &["Пользователь"],
            outcome
                .deactivated_users
                .iter()
                .map(|u| vec![u.clone()])
                .collect(),
        ));
    }
    if !outcome.deactivated_buckets.is_empty() {
        sections.push(table(
            "Деактивированные бакеты",
            &["Бакет"],
            outcome
                .deactivated_buckets
                .iter()
                .map(|b| vec![b.clone()])
                .collect(),
        ));
        sections.push(Section::Banner {
            tone: BannerTone::Warning,
            title: "Важно!".to_string(),
            text: "Не забудьте изменить статус КЕ бакета на \"Вывод из эксплуатации\" в Сфера.Конфигурации."
                .to_string(),
        });
    }
    if !outcome.errors.is_empty() {
        sections.push(Section::Errors {
            title: "Ошибки".to_string(),
            items: outcome.errors.clone(),
        });
    }
    sections
}

fn quota_sections(outcome: &QuotaUpdateOutcome) -> Vec<Section> {
    let mut sections = Vec::new();
    if outcome.updated_buckets.is_empty() {
        sections.push(Section::Banner {
            tone: BannerTone::Info,
            title: "Результат операции".to_string(),
            text: "Ни один бакет не был обновлен".to_string(),
        });
    } else {
        sections.push(table(
            "Успешно обновленные квоты бакетов",
            &["Бакет", "Новая квота"],
            outcome
                .updated_buckets
                .iter()
                .map(|b| vec![b.name.clone(), format!("{}G", b.size)])
                .collect(),
        ));
    }
    if !outcome.errors.is_empty() {
        sections.push(Section::Errors {
            title: "Ошибки".to_string(),
            items: outcome.errors.clone(),
        });
    }
    sections
}

#[cfg(test)]
mod tests {
    use zayavki_client::{
        BucketQuota, BucketStatus, CommandBlock, CommandKind, TenantSummary, UserStatus,
    };

    use super::*;

    fn resources(commands: bool) -> TenantResources {
        TenantResources {
            tenant: TenantSummary {
                name: "if_cosd_t".into(),
                cluster: "cl-ift-01".into(),
                ..Default::default()
            },
            users: vec![UserStatus {
                name: "if_cosd_app".into(),
                exists: true,
                status: "Активен".into(),
            }],
            buckets: vec![],
            commands: commands.then(|| CommandBlock {
                kind: CommandKind::Creation,
                text: "s3 user create if_cosd_app".into(),
            }),
        }
    }

    #[test]
    fn test_text_is_verbatim() {
        let view = ResultView::from_outcome(
            TabId::NewTenant,
            &ProvisioningOutcome::Text("  line one\n\tline two  ".into()),
        );
        assert_eq!(
            view.sections,
            vec![Section::Text {
                title: None,
                body: "  line one\n\tline two  ".into()
            }]
        );
    }

    #[test]
    fn test_empty_search_shows_no_results() {
        let view = ResultView::from_outcome(TabId::Search, &ProvisioningOutcome::Search(vec![]));
        assert_eq!(view.plain_lines()[0], NO_RESULTS);
        assert!(view.export_table().is_none());
    }

    #[test]
    fn test_search_rows_are_exportable() {
        let row = CheckResult {
            tenant: "if_cosd_t".into(),
            quota: "100".into(),
            active: true,
            ..Default::default()
        };
        let view = ResultView::from_outcome(TabId::Search, &ProvisioningOutcome::Search(vec![row]));
        let (header, rows) = view.export_table().unwrap();
        assert_eq!(header.len(), 17);
        assert_eq!(rows[0][0], "✓");
        assert_eq!(rows[0][5], "if_cosd_t");
        assert_eq!(rows[0][8], "100");
    }

    #[test]
    fn test_commands_copyable_only_on_mod_tabs() {
        let outcome = ProvisioningOutcome::TenantResources(resources(true));
        let on_mod = ResultView::from_outcome(TabId::TenantMod, &outcome);
        assert_eq!(on_mod.copyable_commands(), Some("s3 user create if_cosd_app"));

        let on_del = ResultView::from_outcome(TabId::UserBucketDel, &outcome);
        assert_eq!(on_del.copyable_commands(), None);
        assert!(on_del.plain_lines().contains(&"Команды для создания".to_string()));
    }

    #[test]
    fn test_empty_bucket_list_has_no_table() {
        let view = ResultView::from_outcome(
            TabId::TenantMod,
            &ProvisioningOutcome::TenantResources(resources(false)),
        );
        let titles: Vec<_> = view
            .sections
            .iter()
            .filter_map(|s| match s {
                Section::Table { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["Информация о тенанте", "Пользователи"]);
    }

    #[test]
    fn test_noop_deactivation_is_banner() {
        let view = ResultView::from_outcome(
            TabId::UserBucketDel,
            &ProvisioningOutcome::Deactivation(DeactivationOutcome::default()),
        );
        assert_eq!(view.sections.len(), 1);
        assert!(matches!(
            &view.sections[0],
            Section::Banner { tone: BannerTone::Info, .. }
        ));
    }

    #[test]
    fn test_bucket_deactivation_adds_reminder() {
        let outcome = DeactivationOutcome {
            deactivated_users: vec![],
            deactivated_buckets: vec!["if-cosd-b".into()],
            errors: vec!["user x not found".into()],
        };
        let view =
            ResultView::from_outcome(TabId::UserBucketDel, &ProvisioningOutcome::Deactivation(outcome));
        let lines = view.plain_lines();
        assert!(lines.contains(&"Деактивированные бакеты".to_string()));
        assert!(lines.contains(&"Важно!".to_string()));
        assert!(lines.contains(&"user x not found".to_string()));
        assert!(!lines.contains(&"Деактивированные пользователи".to_string()));
    }

    #[test]
    fn test_quota_sizes_get_unit() {
        let outcome = QuotaUpdateOutcome {
            updated_buckets: vec![BucketQuota {
                name: "if-cosd-b".into(),
                size: "200".into(),
            }],
            errors: vec![],
        };
        let view = ResultView::from_outcome(TabId::BucketMod, &ProvisioningOutcome::QuotaUpdate(outcome));
        assert!(view.plain_lines().contains(&"if-cosd-b | 200G".to_string()));
    }

    #[test]
    fn test_empty_quota_update_banner() {
        let view = ResultView::from_outcome(
            TabId::BucketMod,
            &ProvisioningOutcome::QuotaUpdate(QuotaUpdateOutcome::default()),
        );
        assert!(view.plain_lines().contains(&"Ни один бакет не был обновлен".to_string()));
    }

    #[test]
    fn test_tenant_submission_text() {
        let info = TenantInfo {
            tenant: "if_cosd_t".into(),
            cls_name: "cl-ift-01".into(),
            ..Default::default()
        };
        let text = tenant_submission_text(&info, "ok");
        assert!(text.starts_with("Информация о тенанте if_cosd_t:\nКластер: cl-ift-01\n"));
        assert!(text.ends_with("\n\nРезультат проверки:\nok"));
    }

    #[test]
    fn test_bucket_status_table() {
        let mut res = resources(false);
        res.buckets.push(BucketStatus {
            name: "if-cosd-b".into(),
            exists: false,
            size: "".into(),
            status: "Не найден".into(),
        });
        let view = ResultView::from_outcome(TabId::TenantMod, &ProvisioningOutcome::TenantResources(res));
        assert!(view.plain_lines().contains(&"if-cosd-b |  | Не найден".to_string()));
    }
}
