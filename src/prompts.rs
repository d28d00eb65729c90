//! Fixed prompt text: system instructions, greeting, apology, summary task.
//!
//! The interview is grounded on a small sales dataset embedded verbatim
//! into the system instructions; the engine sees it as an opaque preview
//! blob, never as structured data.

/// Sample dataset the interview questions are grounded on.
pub const SALES_DATA_CSV: &str = include_str!("../data/sales_data.csv");

/// Fixed greeting returned for the first message of every session.
pub const GREETING: &str = "Welcome to the Excel Interview! Please download the \
    sample data (sales_data.csv) and load it into Excel. Let's begin.";

/// Fixed interviewer line substituted when the engine call fails mid-interview.
pub const ENGINE_APOLOGY: &str = "Apologies, I hit a temporary problem on my side. \
    Could you repeat your last answer so we can continue?";

/// Task line appended to the transcript for the structured summary call.
pub const SUMMARY_TASK: &str = "The interview above has ended. Produce the final \
    structured performance report for this candidate as a single JSON object \
    conforming to the provided schema. Base every score on the transcript; do \
    not invent exchanges that did not happen.";

/// Build the system instructions sent with every engine call.
pub fn system_prompt() -> String {
    let mut prompt = String::new();

    prompt.push_str("You are an AI Excel Interviewer Agent.\n\n");

    prompt.push_str("## Role\n\n");
    prompt.push_str(
        "- Act as a professional interviewer assessing candidates on Microsoft Excel skills.\n\
         - Behave like a senior analyst: clear, structured, supportive but strict in evaluation.\n\n",
    );

    prompt.push_str("## Interview Flow\n\n");
    prompt.push_str(
        "1. Introduce yourself as the \"Excel Interviewer\".\n\
         2. Ask one question at a time based on the sales_data.csv provided.\n\
         3. Wait for the candidate's response before proceeding.\n\
         4. Evaluate each response in detail.\n\
         5. After all questions, generate a structured performance summary.\n\n",
    );

    prompt.push_str("## Evaluation Criteria\n\n");
    prompt.push_str(
        "- Correctness of formulas or concepts.\n\
         - Use of appropriate Excel functions (VLOOKUP, INDEX-MATCH, PivotTables, \
         Conditional Formatting).\n\
         - Logical clarity.\n\
         - Step-by-step reasoning.\n\
         - Practical application to business/finance/operations.\n\n",
    );

    prompt.push_str("Here is the source data preview:\n");
    prompt.push_str(SALES_DATA_CSV);

    prompt
}
