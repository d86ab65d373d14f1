//! Built-in dictionaries tuned for short, keyword-dense professional
//! networking queries. Deployments with their own curated lists load a TOML
//! file instead (see [`crate::load`]).

pub(crate) const COMPANIES: &[&str] = &[
	"google",
	"meta",
	"apple",
	"amazon",
	"netflix",
	"microsoft",
	"nvidia",
	"openai",
	"anthropic",
	"stripe",
	"airbnb",
	"uber",
	"lyft",
	"salesforce",
	"oracle",
	"ibm",
	"intel",
	"adobe",
	"tesla",
	"spacex",
	"palantir",
	"databricks",
	"snowflake",
	"coinbase",
	"shopify",
	"spotify",
	"pinterest",
	"dropbox",
	"doordash",
	"instacart",
	"robinhood",
	"linkedin",
	"bytedance",
	"tiktok",
	"goldman sachs",
	"morgan stanley",
	"jp morgan",
	"jane street",
	"citadel",
	"two sigma",
	"mckinsey",
	"bain",
	"bcg",
	"deloitte",
	"pwc",
	"kpmg",
	"ernst young",
	"accenture",
	"sequoia",
	"y combinator",
];

pub(crate) const ROLES: &[&str] = &[
	"software engineer",
	"senior software engineer",
	"staff engineer",
	"engineering manager",
	"product manager",
	"senior product manager",
	"program manager",
	"project manager",
	"data scientist",
	"data analyst",
	"data engineer",
	"machine learning engineer",
	"research scientist",
	"product designer",
	"ux designer",
	"ux researcher",
	"designer",
	"founder",
	"cofounder",
	"entrepreneur",
	"ceo",
	"cto",
	"cfo",
	"coo",
	"vp",
	"director",
	"consultant",
	"analyst",
	"investment banker",
	"venture capitalist",
	"investor",
	"recruiter",
	"marketing manager",
	"growth manager",
	"sales engineer",
	"solutions architect",
	"devops engineer",
	"security engineer",
	"swe",
	"pm",
	"em",
	"intern",
];

pub(crate) const SCHOOLS: &[&str] = &[
	"stanford",
	"stanford university",
	"mit",
	"harvard",
	"harvard university",
	"yale",
	"princeton",
	"columbia",
	"brown",
	"cornell",
	"dartmouth",
	"university of pennsylvania",
	"upenn",
	"wharton",
	"berkeley",
	"uc berkeley",
	"ucla",
	"caltech",
	"carnegie mellon",
	"university of michigan",
	"georgia tech",
	"university of washington",
	"university of chicago",
	"northwestern",
	"nyu",
	"duke",
	"oxford",
	"cambridge",
	"eth zurich",
	"tsinghua",
	"peking university",
	"waterloo",
	"university of toronto",
];

pub(crate) const SKILLS: &[&str] = &[
	"python",
	"java",
	"javascript",
	"typescript",
	"rust",
	"golang",
	"kotlin",
	"swift",
	"sql",
	"react",
	"kubernetes",
	"docker",
	"aws",
	"azure",
	"gcp",
	"machine learning",
	"deep learning",
	"artificial intelligence",
	"data science",
	"nlp",
	"computer vision",
	"system design",
	"backend",
	"frontend",
	"full stack",
	"mobile development",
	"ios",
	"android",
	"cybersecurity",
	"blockchain",
	"web3",
	"product management",
	"product strategy",
	"user research",
	"user experience",
	"figma",
	"marketing",
	"seo",
	"sales",
	"business development",
	"fundraising",
	"financial modeling",
	"accounting",
	"negotiation",
	"public speaking",
	"leadership",
	"mentoring",
	"recruiting",
	"analytics",
	"statistics",
	"excel",
	"tableau",
];

// Prepositions, articles, pronouns, auxiliaries, and domain filler. Modifier
// triggers ("not", "must", "about", ...) are matched against the raw word
// stream before this filter applies, so their presence here is harmless.
pub(crate) const STOP_WORDS: &[&str] = &[
	"a", "an", "the", "and", "or", "but", "of", "in", "on", "at", "to", "for", "with", "from",
	"by", "as", "is", "are", "was", "were", "be", "been", "being", "am", "do", "does", "did",
	"have", "has", "had", "will", "would", "can", "could", "should", "may", "might", "about",
	"i", "me", "my", "we", "us", "our", "you", "your", "he", "him", "his", "she", "her", "they",
	"them", "their", "it", "its", "this", "that", "these", "those", "who", "whom", "what",
	"which", "there", "here", "than", "then", "so", "very", "really", "please", "want", "wants",
	"like", "find", "meet", "know", "interested", "looking", "look", "someone", "anyone",
	"people", "person", "experience",
];

pub(crate) const SYNONYMS: &[(&str, &[&str])] = &[
	("ai", &["artificial intelligence", "machine learning"]),
	("alum", &["alumni", "alumnus"]),
	("bd", &["business development"]),
	("crypto", &["blockchain", "web3"]),
	("cs", &["computer science"]),
	("dev", &["developer", "engineer"]),
	("ds", &["data scientist", "data science"]),
	("em", &["engineering manager"]),
	("eng", &["engineer", "engineering"]),
	("fintech", &["financial technology"]),
	("grad", &["graduate"]),
	("hr", &["human resources", "recruiter"]),
	("js", &["javascript"]),
	("k8s", &["kubernetes"]),
	("mba", &["business school"]),
	("mentor", &["mentoring", "mentorship"]),
	("mgr", &["manager"]),
	("ml", &["machine learning"]),
	("phd", &["doctorate", "research"]),
	("pm", &["product manager", "program manager"]),
	("swe", &["software engineer"]),
	("ux", &["user experience", "designer"]),
	("vc", &["venture capital", "venture capitalist", "investor"]),
	("yc", &["y combinator"]),
];

pub(crate) const CONCEPTS: &[(&str, &[&str])] = &[
	("big 4", &["deloitte", "pwc", "kpmg", "ernst young"]),
	("big four", &["deloitte", "pwc", "kpmg", "ernst young"]),
	("big tech", &["google", "meta", "apple", "amazon", "microsoft", "netflix", "nvidia"]),
	("faang", &["google", "meta", "apple", "amazon", "netflix"]),
	(
		"ivy league",
		&[
			"harvard",
			"yale",
			"princeton",
			"columbia",
			"brown",
			"cornell",
			"dartmouth",
			"university of pennsylvania",
		],
	),
	("mbb", &["mckinsey", "bain", "bcg"]),
	("quant", &["jane street", "citadel", "two sigma"]),
	("top tech", &["google", "meta", "apple", "amazon", "microsoft", "netflix", "nvidia"]),
	("unicorn", &["stripe", "databricks", "openai", "anthropic", "spacex"]),
	("wall street", &["goldman sachs", "morgan stanley", "jp morgan"]),
];
