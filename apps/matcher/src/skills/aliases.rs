//! Bundled skill alias table.
//!
//! Each entry maps a canonical skill to the names treated as the same skill.
//! Categories are searched in declaration order and the first hit wins, so a
//! name listed under two canonicals resolves to the earlier one.

use crate::skills::SkillGroupLookup;

type Category = &'static [(&'static str, &'static [&'static str])];

/// Programming languages.
const PROGRAMMING: Category = &[
    ("python", &["py", "python3", "python 3"]),
    ("javascript", &["js", "nodejs", "node.js", "typescript", "ts"]),
    ("typescript", &["ts", "javascript", "js"]),
    ("java", &["springboot", "spring", "j2ee"]),
    ("c++", &["cpp", "c plus plus"]),
    ("c#", &["csharp", "c sharp", ".net"]),
    ("php", &["laravel", "symfony"]),
    ("golang", &["go"]),
    ("rust", &["rustlang"]),
    ("kotlin", &["android"]),
    ("swift", &["ios", "objective-c", "objc"]),
    ("ruby", &["ruby on rails", "ror"]),
    ("scala", &["spark", "big data"]),
    ("r", &["rstudio"]),
];

/// Web frameworks and frontend.
const WEB_FRONTEND: Category = &[
    ("react", &["reactjs", "react.js", "jsx", "react native"]),
    ("angular", &["angularjs", "angular.js", "ng"]),
    ("vue", &["vuejs", "vue.js"]),
    ("next.js", &["nextjs", "next"]),
    ("nuxt", &["nuxtjs"]),
    ("svelte", &["sveltekit"]),
    ("html", &["html5", "markup"]),
    ("css", &["styling", "sass", "scss", "less", "postcss"]),
    ("sass", &["scss", "css"]),
    ("bootstrap", &["css framework", "frontend framework"]),
    ("tailwind", &["tailwind css", "utility css"]),
];

/// Backend and APIs.
const BACKEND: Category = &[
    ("nodejs", &["node.js", "node", "javascript", "js"]),
    ("express", &["express.js", "nodejs"]),
    ("django", &["python", "drf"]),
    ("flask", &["python", "microframework"]),
    ("spring", &["springboot", "java", "spring boot"]),
    ("fastapi", &["python", "async api"]),
    ("rest", &["restful", "rest api", "api"]),
    ("graphql", &["api", "query language"]),
    ("soap", &["web service"]),
];

const DATABASES: Category = &[
    (
        "sql",
        &[
            "mysql",
            "postgresql",
            "postgres",
            "t-sql",
            "tsql",
            "sql server",
            "oracle",
            "mariadb",
        ],
    ),
    ("mysql", &["sql", "mariadb", "percona"]),
    ("postgresql", &["postgres", "sql", "pg"]),
    ("mongodb", &["nosql", "document database", "mongo"]),
    ("redis", &["cache", "in-memory", "nosql", "key-value"]),
    ("cassandra", &["nosql", "distributed database"]),
    ("elasticsearch", &["search", "elk", "opensearch"]),
    ("firebase", &["realtime database", "backend as service"]),
    ("dynamodb", &["nosql", "aws"]),
    ("oracle", &["sql", "database", "relational"]),
    ("sqlite", &["sql", "lightweight database"]),
];

/// Cloud and DevOps.
const CLOUD_DEVOPS: Category = &[
    (
        "aws",
        &[
            "amazon",
            "amazon web services",
            "ec2",
            "s3",
            "lambda",
            "rds",
            "ecs",
            "cloudformation",
        ],
    ),
    ("azure", &["microsoft", "microsoft azure", "cosmos db", "app service"]),
    ("gcp", &["google cloud", "google", "bigquery", "cloud functions", "cloud storage"]),
    ("kubernetes", &["k8s", "container orchestration", "docker"]),
    ("docker", &["containers", "containerization", "docker compose"]),
    ("jenkins", &["ci/cd", "continuous integration", "automation", "devops"]),
    ("gitlab", &["ci/cd", "git", "github", "version control", "devops"]),
    ("github", &["git", "gitlab", "version control", "scm"]),
    ("github actions", &["ci/cd", "automation"]),
    ("terraform", &["infrastructure as code", "iac", "aws", "infrastructure"]),
    ("ansible", &["infrastructure", "automation", "devops", "configuration management"]),
    ("argocd", &["gitops", "continuous delivery"]),
    ("helm", &["kubernetes", "package manager"]),
    ("git", &["github", "gitlab", "bitbucket", "version control", "scm"]),
];

/// Data and ML.
const DATA_ML: Category = &[
    ("tensorflow", &["machine learning", "ml", "deep learning", "keras"]),
    ("pytorch", &["machine learning", "ml", "deep learning", "torch"]),
    ("scikit-learn", &["machine learning", "ml", "sklearn"]),
    ("pandas", &["data analysis", "python", "data science"]),
    ("numpy", &["data analysis", "python", "data science"]),
    ("spark", &["big data", "apache spark", "scala", "pyspark"]),
    ("hadoop", &["big data", "mapreduce", "hdfs"]),
    ("airflow", &["data pipeline", "workflow orchestration"]),
    ("dbt", &["data transformation", "analytics engineering"]),
    ("tableau", &["data visualization", "business intelligence", "bi"]),
    ("powerbi", &["data visualization", "business intelligence", "bi", "microsoft"]),
    ("looker", &["data visualization", "business intelligence"]),
    ("analytics", &["data analytics", "business analytics"]),
];

/// QA and testing.
const QA_TESTING: Category = &[
    ("selenium", &["test automation", "web testing"]),
    ("pytest", &["testing", "python", "unit testing"]),
    ("junit", &["testing", "java", "unit testing"]),
    ("postman", &["api testing", "rest api testing"]),
    ("jira", &["project management", "issue tracking", "agile"]),
    ("testng", &["testing", "java", "automation"]),
    ("cucumber", &["bdd", "behavior driven development"]),
    ("automation", &["test automation", "qa automation"]),
];

/// General business skills.
const BUSINESS_SKILLS: Category = &[
    ("communication", &["interpersonal", "presentation", "writing", "public speaking"]),
    ("leadership", &["management", "team leadership", "people management", "executive"]),
    ("management", &["leadership", "team management", "people management"]),
    ("team management", &["leadership", "management", "team leadership"]),
    ("people management", &["leadership", "management", "hr"]),
    ("problem solving", &["analytical", "troubleshooting", "critical thinking"]),
    ("analytical", &["problem solving", "data analysis", "research"]),
    ("critical thinking", &["problem solving", "analysis"]),
    ("stakeholder management", &["communication", "relationship management"]),
    ("relationship management", &["stakeholder management", "communication"]),
    ("time management", &["organization", "planning", "productivity"]),
    ("organization", &["time management", "planning", "process improvement"]),
    ("planning", &["strategy", "organization", "project planning"]),
    ("strategy", &["strategic planning", "business strategy", "planning"]),
    ("strategic planning", &["strategy", "business planning"]),
    ("business acumen", &["business knowledge", "understanding"]),
    ("decision making", &["analysis", "judgment", "leadership"]),
    ("documentation", &["writing", "technical writing", "reporting"]),
    ("reporting", &["documentation", "analytics", "communication"]),
    ("research", &["analysis", "investigation", "data"]),
    ("presentation skills", &["communication", "public speaking"]),
    ("public speaking", &["presentation", "communication"]),
    ("writing", &["documentation", "communication", "content"]),
    ("listening", &["communication", "interpersonal"]),
    ("teamwork", &["collaboration", "team work"]),
    ("collaboration", &["teamwork", "communication"]),
    ("adaptability", &["flexibility", "learning"]),
    ("flexibility", &["adaptability", "change management"]),
    ("attention to detail", &["quality", "accuracy"]),
    ("multitasking", &["time management", "productivity"]),
    ("reliability", &["dependability", "accountability"]),
    ("accountability", &["responsibility", "reliability"]),
    ("creativity", &["innovation", "design thinking"]),
    ("innovation", &["creativity", "new ideas"]),
    ("customer focus", &["customer service", "customer satisfaction"]),
    ("result oriented", &["performance", "achievement"]),
    ("performance", &["achievement", "result oriented"]),
];

/// Human resources.
const HR: Category = &[
    (
        "human resources",
        &[
            "hr",
            "human resource",
            "hrm",
            "hr management",
            "human resources management",
            "hr operations",
            "people management",
        ],
    ),
    (
        "human resources management",
        &[
            "hr",
            "human resource",
            "hrm",
            "hr management",
            "human resources",
        ],
    ),
    ("hr management", &["human resources", "hr", "human resource management", "hrm"]),
    (
        "recruitment",
        &[
            "recruiting",
            "talent acquisition",
            "hiring",
            "recruitment process",
            "talent management",
            "sourcing",
            "talent",
        ],
    ),
    (
        "payroll",
        &[
            "payroll management",
            "payroll administration",
            "payroll processing",
            "salary processing",
        ],
    ),
    ("payroll administration", &["payroll", "payroll management", "payroll processing", "salary"]),
    ("payroll management", &["payroll", "payroll administration", "salary"]),
    (
        "hrms",
        &[
            "hr software",
            "hr system",
            "hr management system",
            "human resource management system",
            "greythr",
            "brighthr",
            "workday",
            "oracle hcm",
        ],
    ),
    (
        "employee engagement",
        &[
            "engagement",
            "employee relations",
            "staff engagement",
            "team engagement",
        ],
    ),
    ("employee relations", &["employee engagement", "employee management", "staff relations"]),
    (
        "onboarding",
        &[
            "induction",
            "employee onboarding",
            "new hire",
            "joining formalities",
            "orientation",
        ],
    ),
    ("induction", &["onboarding", "orientation", "employee onboarding", "training"]),
    (
        "performance management",
        &[
            "appraisal",
            "performance appraisal",
            "performance review",
            "pms",
        ],
    ),
    ("performance appraisal", &["performance management", "appraisal", "performance review"]),
    ("leave management", &["attendance", "leave admin", "leave tracking", "attendance management"]),
    ("attendance management", &["leave management", "attendance tracking", "time tracking"]),
    (
        "compliance",
        &[
            "statutory compliance",
            "legal compliance",
            "labour law",
            "labor law",
            "regulatory compliance",
        ],
    ),
    ("statutory compliance", &["compliance", "legal", "labour law", "labor law"]),
    ("labour law", &["labor law", "compliance", "statutory compliance", "employment law"]),
    ("labor law", &["labour law", "compliance", "statutory compliance"]),
    (
        "employee grievances",
        &[
            "grievance management",
            "grievance handling",
            "employee relations",
            "conflict resolution",
        ],
    ),
    ("grievance management", &["employee grievances", "grievance handling", "conflict resolution"]),
    (
        "training",
        &[
            "training and development",
            "l&d",
            "learning and development",
            "employee development",
            "training delivery",
        ],
    ),
    ("training and development", &["training", "l&d", "learning and development"]),
    ("exit management", &["offboarding", "employee exit", "exit formalities", "full and final"]),
    ("offboarding", &["exit management", "employee exit", "exit formalities"]),
    ("policy implementation", &["policy", "policy management", "procedure implementation"]),
    ("vendor management", &["vendor coordination", "vendor relations", "supplier management"]),
    ("talent acquisition", &["recruitment", "recruiting", "talent sourcing"]),
    ("talent management", &["recruitment", "employee development", "career management"]),
];

const SALES: Category = &[
    ("sales", &["sales management", "sales execution", "b2b sales", "b2c sales", "sales revenue"]),
    ("sales management", &["sales", "sales execution", "sales leadership"]),
    ("sales leadership", &["sales management", "team management"]),
    ("business development", &["bd", "sales", "partnership", "business growth"]),
    (
        "crm",
        &[
            "salesforce",
            "customer relationship management",
            "dynamics",
            "hubspot",
            "pipedrive",
        ],
    ),
    ("salesforce", &["crm", "customer relationship management", "sales", "force.com"]),
    ("sales execution", &["sales", "deal closure", "sales process"]),
    ("lead generation", &["prospecting", "business development", "sales"]),
    ("pipeline management", &["sales pipeline", "sales process", "deal management"]),
    ("account management", &["customer account", "account executive", "key account"]),
    ("customer retention", &["customer success", "client retention"]),
    ("closing deals", &["sales closure", "negotiation", "sales"]),
    ("negotiation", &["communication", "relationship management", "sales"]),
];

const MARKETING: Category = &[
    (
        "marketing",
        &[
            "digital marketing",
            "content marketing",
            "marketing management",
            "marketing strategy",
        ],
    ),
    ("digital marketing", &["marketing", "seo", "sem", "social media", "online marketing"]),
    ("seo", &["search engine optimization", "digital marketing", "organic search"]),
    ("sem", &["search engine marketing", "ppc", "digital marketing", "paid search"]),
    (
        "social media",
        &[
            "marketing",
            "social media marketing",
            "content",
            "social media management",
        ],
    ),
    ("content marketing", &["marketing", "copywriting", "content creation", "content strategy"]),
    ("email marketing", &["marketing", "campaign", "email campaign"]),
    ("brand management", &["marketing", "brand strategy", "brand identity"]),
    ("product marketing", &["marketing", "product launch", "market positioning"]),
    ("marketing analytics", &["analytics", "marketing", "reporting"]),
    ("campaign management", &["marketing", "marketing execution"]),
    ("inbound marketing", &["marketing", "content marketing", "lead generation"]),
    ("outbound marketing", &["marketing", "sales", "lead generation"]),
    ("advertising", &["marketing", "digital advertising", "ad management"]),
];

/// Finance and accounting.
const FINANCE: Category = &[
    ("accounting", &["bookkeeping", "financial accounting", "finance", "accounts"]),
    ("finance", &["financial management", "accounting", "bookkeeping", "financial planning"]),
    ("financial analysis", &["finance", "data analysis", "reporting", "financial modeling"]),
    ("budgeting", &["financial planning", "cost management", "budget planning"]),
    ("tax", &["tax planning", "compliance", "accounting", "tax preparation"]),
    ("audit", &["internal audit", "external audit", "compliance", "audit"]),
    ("excel", &["spreadsheet", "data analysis", "financial modeling"]),
    ("sap", &["erp", "enterprise resource planning", "finance", "accounting"]),
    ("quickbooks", &["accounting", "bookkeeping", "finance"]),
    ("financial planning", &["budgeting", "forecasting", "financial strategy"]),
    ("cost accounting", &["accounting", "cost management"]),
    ("accounts payable", &["accounting", "payables"]),
    ("accounts receivable", &["accounting", "receivables", "ar"]),
    ("general ledger", &["accounting", "gl"]),
];

/// Legal and compliance.
const LEGAL: Category = &[
    ("legal", &["law", "contract", "legal compliance"]),
    ("compliance", &["regulatory", "legal", "policy"]),
    ("contract management", &["legal", "contract"]),
    ("intellectual property", &["ip", "patents", "trademarks"]),
    ("litigation", &["legal", "court"]),
    ("legal research", &["legal", "law"]),
    ("regulatory compliance", &["compliance", "regulations"]),
    ("data privacy", &["compliance", "gdpr", "ccpa"]),
    ("gdpr", &["data privacy", "compliance", "eu regulation"]),
];
const BUILTIN_CATEGORIES: &[Category] = &[
    PROGRAMMING,
    WEB_FRONTEND,
    BACKEND,
    DATABASES,
    CLOUD_DEVOPS,
    DATA_ML,
    QA_TESTING,
    BUSINESS_SKILLS,
    HR,
    SALES,
    MARKETING,
    FINANCE,
    LEGAL,
];

#[derive(Debug, Clone)]
struct AliasGroup {
    canonical: String,
    /// Lookup-normalized canonical followed by its aliases.
    names: Vec<String>,
}

/// Read-only canonical-group table.
#[derive(Debug, Clone, Default)]
pub struct SkillAliasTable {
    groups: Vec<AliasGroup>,
}

impl SkillAliasTable {
    pub fn builtin() -> Self {
        Self::from_groups(
            BUILTIN_CATEGORIES
                .iter()
                .flat_map(|category| category.iter())
                .map(|(canonical, aliases)| (*canonical, aliases.iter().copied())),
        )
    }

    /// Builds a table from `(canonical, aliases)` pairs, in priority order.
    pub fn from_groups<'a, G, A>(groups: G) -> Self
    where
        G: IntoIterator<Item = (&'a str, A)>,
        A: IntoIterator<Item = &'a str>,
    {
        let groups = groups
            .into_iter()
            .map(|(canonical, aliases)| {
                let mut names = vec![lookup_key(canonical)];
                names.extend(aliases.into_iter().map(lookup_key));
                AliasGroup {
                    canonical: canonical.trim().to_lowercase(),
                    names,
                }
            })
            .collect();
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl SkillGroupLookup for SkillAliasTable {
    fn lookup_group(&self, skill: &str) -> Option<&str> {
        let key = lookup_key(skill);
        if key.is_empty() {
            return None;
        }
        self.groups
            .iter()
            .find(|group| group.names.iter().any(|name| *name == key))
            .map(|group| group.canonical.as_str())
    }
}

/// Lowercase, dots removed, hyphens as spaces.
fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase().replace('.', "").replace('-', " ")
}
