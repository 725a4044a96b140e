pub const REVIEW_PROMPT_HEADER: &str = "\
You are an experienced senior software engineer.
Review the following code and provide:
- Code issues or bugs
- Suggestions for improvements
- Code readability tips
- Security or performance issues (if any)

Code:
";

pub const NO_FEEDBACK_PLACEHOLDER: &str = "No feedback available.";

pub const NO_CODE_MESSAGE: &str = "No code provided";
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch review";

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_MAX_TOKENS: i32 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SERVER_PORT: u16 = 4000;
