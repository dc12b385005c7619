use serde::Deserialize;

/// Wire shape of the quiz endpoint response.
///
/// The upstream names the answer list `answer` (singular); both fields are
/// tolerated absent so a sparse payload still decodes.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizPayload {
    /// Question text to display.
    pub question: Option<String>,
    /// Expected keyword answers, in upstream order.
    #[serde(rename = "answer")]
    pub answers: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_answer_field_into_answers() {
        let payload: QuizPayload = serde_json::from_str(
            r#"{"question": "List all Java keywords", "answer": ["abstract", "public"]}"#,
        )
        .unwrap();

        assert_eq!(payload.question.as_deref(), Some("List all Java keywords"));
        assert_eq!(
            payload.answers,
            Some(vec!["abstract".to_string(), "public".to_string()])
        );
    }

    #[test]
    fn tolerates_missing_fields() {
        let payload: QuizPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.question.is_none());
        assert!(payload.answers.is_none());
    }

    #[test]
    fn keeps_duplicate_answers_as_sent() {
        let payload: QuizPayload =
            serde_json::from_str(r#"{"question": "q", "answer": ["for", "for"]}"#).unwrap();
        assert_eq!(payload.answers.unwrap().len(), 2);
    }

    #[test]
    fn rejects_non_array_answer_field() {
        let result = serde_json::from_str::<QuizPayload>(r#"{"answer": "abstract"}"#);
        assert!(result.is_err());
    }
}
