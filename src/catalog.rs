// SPDX-License-Identifier: MPL-2.0
//! Seed data for the portal prototype.
//!
//! Everything the screens display is generated here, once, by the
//! composition root (`App::new`). Each collection is then moved into the
//! screen state that owns it; nothing in this module is global or shared.
//! The generators are deterministic so tests can assert on exact contents.

use crate::domain::group::{GroupId, GroupStatus, ReportGroup};
use crate::domain::notice::GroupNotice;
use crate::domain::report::{Report, ReportId, ReportStatus};
use crate::domain::request::{RequestId, RequestStatus, SubscriptionRequest};
use crate::domain::transfer::{FileArrival, FileId, TransferFile, TransferStatus};
use chrono::NaiveDate;

/// Name/description templates the group generator cycles through.
const GROUP_TEMPLATES: [(&str, &str); 8] = [
    ("Ops_Reports", "Operations and performance reports"),
    ("Finance_Reports", "Financial insights and expense summaries"),
    ("Compliance_Data", "Compliance and audit data access"),
    ("HR_Metrics", "HR workforce planning and attrition metrics"),
    ("IT_Security", "IT infrastructure uptime and incident logs"),
    ("Treasury_Assets", "Monthly treasury management and liquidity forecasts"),
    ("Retail_Sales", "Retail banking customer acquisition and churn reports"),
    (
        "Wholesale_Credit",
        "Global commodity market analysis and hedging strategy papers",
    ),
];

/// Report groups that carry per-group report listings on the shelf.
const SHELF_GROUPS: [&str; 6] = [
    "Ops_Reports",
    "Finance_Reports",
    "Compliance_Data",
    "HR_Metrics",
    "IT_Security",
    "Treasury_Assets",
];

const REPORT_DESCRIPTIONS: [&str; 6] = [
    "Detailed quarterly financial summary for Q1.",
    "Operations efficiency report focused on logistical improvements.",
    "Compliance audit results and recommendation findings.",
    "Market analysis report detailing regional sector performance.",
    "Customer feedback synthesis and service improvement plan.",
    "Risk assessment for Q3 investments and mitigation strategies.",
];

const TRANSFER_DESTINATIONS: [&str; 4] = [
    "Client_Folder_A",
    "Client_Folder_B",
    "Compliance_Review",
    "Archive_Backup",
];

const TRANSFER_KINDS: [&str; 4] = ["Quarterly", "Daily", "Audit", "Summary"];

/// Reports per shelf group.
const REPORTS_PER_GROUP: u32 = 100;

/// Rows in the fallback listing shown when no group resolves.
const FALLBACK_REPORT_COUNT: u32 = 20;

/// Rows in the ops transfer queue.
const TRANSFER_FILE_COUNT: u32 = 50;

/// Everything the composition root hands to the screens.
#[derive(Debug)]
pub struct Catalog {
    pub subscribed_groups: Vec<ReportGroup>,
    pub unsubscribed_groups: Vec<ReportGroup>,
    pub group_notices: Vec<GroupNotice>,
    pub report_shelf: ReportShelf,
    pub subscription_requests: Vec<SubscriptionRequest>,
    pub transfer_files: Vec<TransferFile>,
    pub file_arrivals: Vec<FileArrival>,
}

impl Catalog {
    /// Builds the full seed catalog.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            subscribed_groups: generate_groups(true, 1, 15),
            unsubscribed_groups: generate_groups(false, 16, 10),
            group_notices: generate_notices(),
            report_shelf: ReportShelf::generate(),
            subscription_requests: generate_requests(),
            transfer_files: generate_transfer_files(),
            file_arrivals: generate_arrivals(),
        }
    }
}

/// Per-group report listings plus the fallback listing used when a requested
/// group is unknown. Lookup degrades, it never fails.
#[derive(Debug)]
pub struct ReportShelf {
    groups: Vec<(String, Vec<Report>)>,
    fallback: Vec<Report>,
}

impl ReportShelf {
    /// Builds the per-group listings and the fallback listing.
    #[must_use]
    pub fn generate() -> Self {
        let mut groups = Vec::with_capacity(SHELF_GROUPS.len());
        let mut next_id = 1u32;
        for name in SHELF_GROUPS {
            let display_name = name.replace('_', " ");
            let mut reports = Vec::with_capacity(REPORTS_PER_GROUP as usize);
            for i in 1..=REPORTS_PER_GROUP {
                let id = next_id;
                next_id += 1;
                reports.push(Report {
                    id: ReportId(id),
                    name: format!("{display_name} File {i}"),
                    group: Some(name.to_string()),
                    description: REPORT_DESCRIPTIONS[(i as usize) % REPORT_DESCRIPTIONS.len()]
                        .to_string(),
                    date: format!("2024-03-{:02}", i % 28 + 1),
                    status: match i % 3 {
                        0 => ReportStatus::Processed,
                        1 => ReportStatus::Pending,
                        _ => ReportStatus::Failed,
                    },
                    url: format!("/reports/file{id}.pdf"),
                });
            }
            groups.push((name.to_string(), reports));
        }

        let fallback = (1..=FALLBACK_REPORT_COUNT)
            .map(|i| Report {
                id: ReportId(9000 + i),
                name: format!("Demo File {i}: Template Metrics"),
                group: None,
                description:
                    "Static file for demonstration purposes. Date range is 2024-01-01 to 2024-01-20."
                        .to_string(),
                date: format!("2024-01-{i:02}"),
                status: if i % 3 == 0 {
                    ReportStatus::Pending
                } else {
                    ReportStatus::Processed
                },
                url: "/reports/demo_3.pdf".to_string(),
            })
            .collect();

        Self { groups, fallback }
    }

    /// Returns the listing for a known group name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&[Report]> {
        self.groups
            .iter()
            .find(|(group, _)| group == name)
            .map(|(_, reports)| reports.as_slice())
    }

    /// The listing shown when no group resolves.
    #[must_use]
    pub fn fallback(&self) -> &[Report] {
        &self.fallback
    }
}

fn generate_groups(subscribed: bool, start_id: u32, count: u32) -> Vec<ReportGroup> {
    const SUBSCRIBED_STATUSES: [GroupStatus; 4] = [
        GroupStatus::Active,
        GroupStatus::Active,
        GroupStatus::Active,
        GroupStatus::Inactive,
    ];

    (0..count)
        .map(|i| {
            let id = start_id + i;
            let (name, description) = GROUP_TEMPLATES[(id as usize) % GROUP_TEMPLATES.len()];
            ReportGroup {
                id: GroupId(id),
                name: format!("{name}_G{id}"),
                description: if subscribed {
                    format!("[Batch {id}] {description}")
                } else {
                    description.to_string()
                },
                subscribed_on: subscribed
                    .then(|| NaiveDate::from_ymd_opt(2024, id % 12 + 1, id % 28 + 1))
                    .flatten(),
                status: if subscribed {
                    SUBSCRIBED_STATUSES[(i as usize) % SUBSCRIBED_STATUSES.len()]
                } else {
                    GroupStatus::Available
                },
            }
        })
        .collect()
}

fn generate_notices() -> Vec<GroupNotice> {
    [
        (
            "Ops_Reports",
            "New operations report uploaded on 2025-10-09",
        ),
        (
            "Finance_Reports",
            "Monthly finance report summary available",
        ),
        ("Compliance_Data", "Compliance audit access restored"),
    ]
    .into_iter()
    .map(|(group, message)| GroupNotice {
        group: group.to_string(),
        message: message.to_string(),
    })
    .collect()
}

fn generate_requests() -> Vec<SubscriptionRequest> {
    const USERS: [&str; 5] = ["Alice", "Bob", "Charlie", "Dana", "Eve"];
    const GROUPS: [&str; 4] = [
        "Finance_Reports",
        "Ops_Reports",
        "HR_Metrics",
        "Compliance_Data",
    ];
    const FOLDERS: [&str; 3] = ["Client_Data_A", "Regulatory_Audit", "Internal_Finance"];
    const REPORTS: [&str; 3] = ["Q3-Report-2024", "Daily-P&L-Summary", "Audit-Log-2024"];

    (1..=15u32)
        .filter_map(|i| {
            let date = NaiveDate::from_ymd_opt(2024, 5, i)?;
            Some(SubscriptionRequest {
                id: RequestId(i),
                user_name: USERS[(i as usize) % USERS.len()].to_string(),
                ad_group: GROUPS[(i as usize) % GROUPS.len()].to_string(),
                folder: FOLDERS[(i as usize) % FOLDERS.len()].to_string(),
                report_name: REPORTS[(i as usize) % REPORTS.len()].to_string(),
                date_requested: date,
                status: if i < 5 {
                    RequestStatus::Pending
                } else if i < 10 {
                    RequestStatus::Approved
                } else {
                    RequestStatus::Denied
                },
            })
        })
        .collect()
}

fn generate_transfer_files() -> Vec<TransferFile> {
    (1..=TRANSFER_FILE_COUNT)
        .map(|i| TransferFile {
            id: FileId(format!("FILE-{}", 1000 + i)),
            file_name: format!(
                "Report_{}_{i}.pdf",
                TRANSFER_KINDS[(i as usize) % TRANSFER_KINDS.len()]
            ),
            destination_folder: TRANSFER_DESTINATIONS[(i as usize) % TRANSFER_DESTINATIONS.len()]
                .to_string(),
            status: TransferStatus::Ready,
        })
        .collect()
}

fn generate_arrivals() -> Vec<FileArrival> {
    [
        ("NEW-1", "Q4_Financial_Summary.pdf", TRANSFER_DESTINATIONS[0]),
        ("NEW-2", "Daily_Risk_Log_T+1.pdf", TRANSFER_DESTINATIONS[1]),
        ("NEW-3", "Compliance_Check_Oct.pdf", TRANSFER_DESTINATIONS[2]),
    ]
    .into_iter()
    .map(|(id, file_name, destination)| FileArrival {
        id: FileId(id.to_string()),
        file_name: file_name.to_string(),
        destination_folder: destination.to_string(),
    })
    .collect()
}
