//! Database schema of the e-learning system, as documented in the report.
//!
//! This is presentation content: nothing here is executed against a database.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Key annotation printed in the "Khóa" column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyKind {
    Plain,
    Primary,
    Foreign,
    Unique,
    ForeignUnique,
}

impl KeyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyKind::Plain => "",
            KeyKind::Primary => "PK",
            KeyKind::Foreign => "FK",
            KeyKind::Unique => "UNIQUE",
            KeyKind::ForeignUnique => "FK UNIQUE",
        }
    }

    pub fn is_primary(self) -> bool {
        matches!(self, KeyKind::Primary)
    }

    pub fn is_foreign(self) -> bool {
        matches!(self, KeyKind::Foreign | KeyKind::ForeignUnique)
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a table listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub key: KeyKind,
    pub description: &'static str,
}

/// Target of a foreign key, parsed from a `Tham chiếu <table>(<column>)` description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignRef<'a> {
    pub table: &'a str,
    pub column: &'a str,
}

static REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Tham chiếu (\w+)\((\w+)\)$").expect("valid reference regex"));

/// Parse a foreign-key description. Returns `None` for free-text descriptions.
pub fn parse_reference(description: &str) -> Option<ForeignRef<'_>> {
    let caps = REFERENCE_RE.captures(description.trim())?;
    Some(ForeignRef {
        table: caps.get(1)?.as_str(),
        column: caps.get(2)?.as_str(),
    })
}

impl FieldSpec {
    /// Row cells in column order: name, type, key, description.
    pub fn cells(&self) -> [&'static str; 4] {
        [self.name, self.sql_type, self.key.as_str(), self.description]
    }

    /// The referenced table and column, if the description follows the convention.
    pub fn reference(&self) -> Option<ForeignRef<'static>> {
        parse_reference(self.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl TableSpec {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

const __: KeyKind = KeyKind::Plain;
const PK: KeyKind = KeyKind::Primary;
const FK: KeyKind = KeyKind::Foreign;
const UQ: KeyKind = KeyKind::Unique;
const FU: KeyKind = KeyKind::ForeignUnique;

const fn f(
    name: &'static str,
    sql_type: &'static str,
    key: KeyKind,
    description: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        sql_type,
        key,
        description,
    }
}

/// All documented tables, in report order.
pub static SCHEMA: &[TableSpec] = &[
    TableSpec {
        name: "academic_class_courses",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("class_id", "bigint", FK, "Tham chiếu academic_classes(id)"),
            f("course_id", "bigint", FK, "Tham chiếu courses(id)"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "academic_class_instructors",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("class_id", "bigint", FK, "Tham chiếu academic_classes(id)"),
            f("instructor_id", "bigint", FK, "Tham chiếu user_instructors(id)"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "academic_classes",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("code", "varchar(20)", UQ, "Mã lớp"),
            f("name", "varchar(255)", __, "Tên lớp"),
            f("academic_year", "varchar(20)", __, "Năm học"),
            f("status", "enum", __, "Trạng thái"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "assignment_submissions",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("assignment_id", "bigint", FK, "Tham chiếu assignments(id)"),
            f("user_id", "bigint", FK, "Tham chiếu users(id)"),
            f("submission_text", "text", __, "Nội dung nộp"),
            f("file_url", "varchar(255)", __, "File đính kèm"),
            f("submitted_at", "timestamp", __, "Thời gian nộp"),
            f("status", "enum", __, "Trạng thái"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "assignments",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("lesson_id", "bigint", FK, "Tham chiếu course_lessons(id)"),
            f("academic_class_id", "bigint", FK, "Tham chiếu academic_classes(id)"),
            f("title", "varchar(255)", __, "Tiêu đề"),
            f("description", "text", __, "Mô tả"),
            f("due_date", "timestamp", __, "Hạn nộp"),
            f("max_score", "int", __, "Điểm tối đa"),
            f("file_requirements", "text", __, "Yêu cầu file"),
            f("assignment_type", "enum", __, "Loại bài tập"),
            f("start_time", "datetime", __, "Bắt đầu"),
            f("end_time", "datetime", __, "Kết thúc"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "categories",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("name", "varchar(100)", __, "Tên danh mục"),
            f("description", "text", __, "Mô tả"),
            f("status", "enum", __, "Trạng thái"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "certificates",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("user_id", "bigint", FK, "Tham chiếu users(id)"),
            f("course_id", "bigint", FK, "Tham chiếu courses(id)"),
            f("certificate_number", "varchar(100)", UQ, "Số chứng chỉ"),
            f("certificate_url", "varchar(255)", __, "Đường dẫn chứng chỉ"),
            f("issue_date", "timestamp", __, "Ngày cấp"),
            f("expiry_date", "timestamp", __, "Ngày hết hạn"),
            f("status", "enum", __, "Trạng thái"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "chatbot_response",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("question", "text", __, "Câu hỏi"),
            f("answer", "text", __, "Câu trả lời"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "class_schedules",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("course_id", "bigint", FK, "Tham chiếu courses(id)"),
            f("instructor_id", "bigint", FK, "Tham chiếu user_instructors(id)"),
            f("title", "varchar(255)", __, "Tiêu đề"),
            f("description", "text", __, "Mô tả"),
            f("start_time", "timestamp", __, "Bắt đầu"),
            f("end_time", "timestamp", __, "Kết thúc"),
            f("recurring_type", "enum", __, "Lặp lại"),
            f("recurring_days", "varchar(50)", __, "Ngày lặp"),
            f("recurring_until", "date", __, "Lặp đến"),
            f("location_type", "enum", __, "Loại địa điểm"),
            f("physical_location", "varchar(255)", __, "Địa điểm offline"),
            f("online_meeting_url", "varchar(255)", __, "Link online"),
            f("max_participants", "int", __, "Số lượng tối đa"),
            f("status", "enum", __, "Trạng thái"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "course_lesson_discussions",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("lesson_id", "bigint", FK, "Tham chiếu course_lessons(id)"),
            f("user_id", "bigint", FK, "Tham chiếu users(id)"),
            f("content", "text", __, "Nội dung thảo luận"),
            f("parent_id", "bigint", FK, "Thảo luận cha"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "course_lessons",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("section_id", "bigint", FK, "Tham chiếu course_sections(id)"),
            f("title", "varchar(255)", __, "Tiêu đề"),
            f("content", "text", __, "Nội dung"),
            f("video_url", "varchar(255)", __, "Video bài học"),
            f("duration", "int", __, "Thời lượng (phút)"),
            f("order_number", "int", __, "Thứ tự"),
            f("status", "enum", __, "Trạng thái"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "course_progress",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("user_id", "bigint", FK, "Tham chiếu users(id)"),
            f("course_id", "bigint", FK, "Tham chiếu courses(id)"),
            f("lesson_id", "bigint", FK, "Tham chiếu course_lessons(id)"),
            f("status", "enum", __, "Trạng thái"),
            f("completed_at", "timestamp", __, "Ngày hoàn thành"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "course_sections",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("course_id", "bigint", FK, "Tham chiếu courses(id)"),
            f("title", "varchar(255)", __, "Tiêu đề"),
            f("description", "text", __, "Mô tả"),
            f("order_number", "int", __, "Thứ tự"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "courses",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("title", "varchar(255)", __, "Tiêu đề"),
            f("description", "text", __, "Mô tả"),
            f("category_id", "bigint", FK, "Tham chiếu categories(id)"),
            f("instructor_id", "bigint", FK, "Tham chiếu user_instructors(id)"),
            f("price", "decimal(10,2)", __, "Giá"),
            f("level", "enum", __, "Trình độ"),
            f("status", "enum", __, "Trạng thái"),
            f("thumbnail_url", "varchar(255)", __, "Ảnh đại diện"),
            f("required", "text", __, "Yêu cầu"),
            f("learned", "text", __, "Kết quả đạt được"),
            f("start_date", "date", __, "Ngày bắt đầu"),
            f("end_date", "date", __, "Ngày kết thúc"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "documents",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("course_id", "bigint", FK, "Tham chiếu courses(id)"),
            f("title", "varchar(255)", __, "Tiêu đề"),
            f("file_url", "varchar(255)", __, "Đường dẫn file"),
            f("file_type", "varchar(50)", __, "Loại file"),
            f("file_size", "int", __, "Kích thước file"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "enrollments",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("user_id", "bigint", FK, "Tham chiếu users(id)"),
            f("course_id", "bigint", FK, "Tham chiếu courses(id)"),
            f("enrollment_date", "timestamp", __, "Ngày đăng ký"),
            f("status", "enum", __, "Trạng thái"),
            f("completion_date", "timestamp", __, "Ngày hoàn thành"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "forum_likes",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("forum_id", "bigint", FK, "Tham chiếu forums(id)"),
            f("user_id", "bigint", FK, "Tham chiếu users(id)"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "forum_replies",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("forum_id", "bigint", FK, "Tham chiếu forums(id)"),
            f("user_id", "bigint", FK, "Tham chiếu users(id)"),
            f("parent_id", "bigint", FK, "Phản hồi cha"),
            f("content", "text", __, "Nội dung"),
            f("is_solution", "tinyint(1)", __, "Là giải pháp"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "forums",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("course_id", "bigint", FK, "Tham chiếu courses(id)"),
            f("user_id", "bigint", FK, "Tham chiếu users(id)"),
            f("title", "varchar(255)", __, "Tiêu đề"),
            f("description", "text", __, "Mô tả"),
            f("thumbnail_url", "text", __, "Ảnh đại diện"),
            f("status", "enum", __, "Trạng thái"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "instructor_availability",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("instructor_id", "bigint", FK, "Tham chiếu users(id)"),
            f("day_of_week", "tinyint", __, "Thứ trong tuần"),
            f("start_time", "time", __, "Giờ bắt đầu"),
            f("end_time", "time", __, "Giờ kết thúc"),
            f("is_available", "tinyint(1)", __, "Có sẵn"),
            f("repeat_weekly", "tinyint(1)", __, "Lặp lại hàng tuần"),
            f("effective_from", "date", __, "Hiệu lực từ"),
            f("effective_until", "date", __, "Hiệu lực đến"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "messages",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("sender_id", "bigint", FK, "Người gửi"),
            f("receiver_id", "bigint", FK, "Người nhận"),
            f("content", "text", __, "Nội dung"),
            f("is_read", "tinyint(1)", __, "Đã đọc"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "notifications",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("user_id", "bigint", FK, "Tham chiếu users(id)"),
            f("title", "varchar(255)", __, "Tiêu đề"),
            f("content", "text", __, "Nội dung"),
            f("type", "enum", __, "Loại thông báo"),
            f("is_read", "tinyint(1)", __, "Đã đọc"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "payments",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("user_id", "bigint", FK, "Tham chiếu users(id)"),
            f("course_id", "bigint", FK, "Tham chiếu courses(id)"),
            f("amount", "decimal(10,2)", __, "Số tiền"),
            f("payment_method", "enum", __, "Phương thức"),
            f("transaction_id", "varchar(100)", __, "Mã giao dịch"),
            f("status", "enum", __, "Trạng thái"),
            f("payment_date", "timestamp", __, "Ngày thanh toán"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "quiz_attempts",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("user_id", "bigint", FK, "Tham chiếu users(id)"),
            f("quiz_id", "bigint", FK, "Tham chiếu quizzes(id)"),
            f("start_time", "timestamp", __, "Bắt đầu"),
            f("end_time", "timestamp", __, "Kết thúc"),
            f("score", "decimal(5,2)", __, "Điểm"),
            f("status", "enum", __, "Trạng thái"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "quiz_options",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("question_id", "bigint", FK, "Tham chiếu quiz_questions(id)"),
            f("content", "text", __, "Nội dung"),
            f("is_correct", "tinyint(1)", __, "Đáp án đúng"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "quiz_questions",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("quiz_id", "bigint", FK, "Tham chiếu quizzes(id)"),
            f("question_text", "text", __, "Nội dung câu hỏi"),
            f("question_type", "enum", __, "Loại câu hỏi"),
            f("correct_explanation", "text", __, "Giải thích đáp án"),
            f("points", "int", __, "Số điểm"),
            f("order_number", "int", __, "Thứ tự"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "quiz_responses",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("attempt_id", "bigint", FK, "Tham chiếu quiz_attempts(id)"),
            f("question_id", "bigint", FK, "Tham chiếu quiz_questions(id)"),
            f("option_id", "bigint", FK, "Tham chiếu quiz_options(id)"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "quizzes",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("lesson_id", "bigint", FK, "Tham chiếu course_lessons(id)"),
            f("academic_class_id", "bigint", FK, "Tham chiếu academic_classes(id)"),
            f("title", "varchar(255)", __, "Tiêu đề"),
            f("description", "text", __, "Mô tả"),
            f("time_limit", "int", __, "Giới hạn thời gian"),
            f("passing_score", "int", __, "Điểm đạt"),
            f("attempts_allowed", "int", __, "Số lần làm"),
            f("quiz_type", "enum", __, "Loại bài kiểm tra"),
            f("show_explanation", "tinyint(1)", __, "Hiện giải thích"),
            f("start_time", "datetime", __, "Bắt đầu"),
            f("end_time", "datetime", __, "Kết thúc"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "reviews",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("user_student_id", "bigint", FK, "Tham chiếu user_students(id)"),
            f("course_id", "bigint", FK, "Tham chiếu courses(id)"),
            f("review_type", "enum", __, "Loại đánh giá"),
            f("rating", "int", __, "Số sao"),
            f("review_text", "text", __, "Nội dung"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "user_admins",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("user_id", "bigint", FU, "Tham chiếu users(id)"),
            f("full_name", "varchar(100)", __, "Họ tên"),
            f("department", "varchar(100)", __, "Phòng ban"),
            f("position", "varchar(100)", __, "Chức vụ"),
            f("admin_level", "enum", __, "Cấp quản trị"),
            f("permissions", "json", __, "Quyền hạn"),
            f("emergency_contact", "varchar(100)", __, "Liên hệ khẩn cấp"),
            f("office_location", "varchar(255)", __, "Văn phòng"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "user_grades",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("user_id", "bigint", FK, "Tham chiếu users(id)"),
            f("graded_by", "bigint", FK, "Giảng viên chấm"),
            f("course_id", "bigint", FK, "Tham chiếu courses(id)"),
            f("lesson_id", "bigint", FK, "Tham chiếu course_lessons(id)"),
            f("assignment_submission_id", "bigint", FK, "Tham chiếu assignment_submissions(id)"),
            f("quiz_attempt_id", "bigint", FK, "Tham chiếu quiz_attempts(id)"),
            f("grade_type", "enum", __, "Loại điểm"),
            f("score", "decimal(5,2)", __, "Điểm"),
            f("max_score", "decimal(5,2)", __, "Điểm tối đa"),
            f("weight", "decimal(5,2)", __, "Trọng số"),
            f("feedback", "text", __, "Nhận xét"),
            f("graded_at", "timestamp", __, "Ngày chấm"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "user_instructors",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("user_id", "bigint", FU, "Tham chiếu users(id)"),
            f("full_name", "varchar(100)", __, "Họ tên"),
            f("professional_title", "varchar(100)", __, "Chức danh"),
            f("specialization", "varchar(255)", __, "Chuyên môn"),
            f("education_background", "text", __, "Học vấn"),
            f("teaching_experience", "text", __, "Kinh nghiệm"),
            f("bio", "text", __, "Giới thiệu"),
            f("expertise_areas", "text", __, "Lĩnh vực chuyên môn"),
            f("certificates", "text", __, "Chứng chỉ"),
            f("linkedin_profile", "varchar(255)", __, "LinkedIn"),
            f("website", "varchar(255)", __, "Website"),
            f("payment_info", "json", __, "Thông tin thanh toán"),
            f("verification_status", "enum", __, "Trạng thái xác minh"),
            f("verification_documents", "text", __, "Tài liệu xác minh"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "user_students",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("user_id", "bigint", FU, "Tham chiếu users(id)"),
            f("full_name", "varchar(100)", __, "Họ tên"),
            f("date_of_birth", "date", __, "Ngày sinh"),
            f("gender", "enum", __, "Giới tính"),
            f("education_level", "varchar(100)", __, "Trình độ học vấn"),
            f("occupation", "varchar(100)", __, "Nghề nghiệp"),
            f("bio", "text", __, "Giới thiệu"),
            f("interests", "text", __, "Sở thích"),
            f("address", "text", __, "Địa chỉ"),
            f("city", "varchar(100)", __, "Thành phố"),
            f("country", "varchar(100)", __, "Quốc gia"),
            f("learning_goals", "text", __, "Mục tiêu học tập"),
            f("preferred_language", "varchar(50)", __, "Ngôn ngữ"),
            f("notification_preferences", "json", __, "Tùy chọn thông báo"),
            f("total_courses_enrolled", "int", __, "Số khóa đã đăng ký"),
            f("total_courses_completed", "int", __, "Số khóa đã hoàn thành"),
            f("achievement_points", "int", __, "Điểm thành tích"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "user_students_academic",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("user_id", "bigint", FU, "Tham chiếu users(id)"),
            f("academic_class_id", "bigint", FK, "Tham chiếu academic_classes(id)"),
            f("student_code", "varchar(50)", UQ, "Mã sinh viên"),
            f("full_name", "varchar(100)", __, "Họ tên"),
            f("academic_year", "varchar(20)", __, "Năm học"),
            f("status", "enum", __, "Trạng thái"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
    TableSpec {
        name: "users",
        fields: &[
            f("id", "bigint", PK, "ID tự tăng"),
            f("username", "varchar(50)", UQ, "Tên đăng nhập"),
            f("email", "varchar(100)", UQ, "Email"),
            f("phone", "varchar(15)", __, "Số điện thoại"),
            f("password", "varchar(255)", __, "Mật khẩu"),
            f("role", "enum", __, "Vai trò"),
            f("status", "enum", __, "Trạng thái"),
            f("avatar_url", "varchar(255)", __, "Ảnh đại diện"),
            f("two_factor_enabled", "tinyint(1)", __, "Bảo mật 2 lớp"),
            f("two_factor_secret", "varchar(100)", __, "Mã bảo mật 2 lớp"),
            f("social_login_provider", "varchar(50)", __, "Đăng nhập MXH"),
            f("social_login_id", "text", __, "ID MXH"),
            f("last_login", "timestamp", __, "Đăng nhập cuối"),
            f("refresh_token", "text", __, "Refresh token"),
            f("created_at", "timestamp", __, "Ngày tạo"),
            f("updated_at", "timestamp", __, "Ngày cập nhật"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str) -> Option<&'static TableSpec> {
        SCHEMA.iter().find(|t| t.name == name)
    }

    #[test]
    fn test_schema_has_all_tables() {
        assert_eq!(SCHEMA.len(), 35);
        assert_eq!(SCHEMA[0].name, "academic_class_courses");
        assert_eq!(SCHEMA[SCHEMA.len() - 1].name, "users");
    }

    #[test]
    fn test_key_kind_renders_original_annotations() {
        assert_eq!(KeyKind::Plain.to_string(), "");
        assert_eq!(KeyKind::Primary.to_string(), "PK");
        assert_eq!(KeyKind::ForeignUnique.to_string(), "FK UNIQUE");
        assert!(KeyKind::ForeignUnique.is_foreign());
        assert!(!KeyKind::Unique.is_foreign());
    }

    #[test]
    fn test_parse_reference() {
        let r = parse_reference("Tham chiếu academic_classes(id)").unwrap();
        assert_eq!(r.table, "academic_classes");
        assert_eq!(r.column, "id");
        assert!(parse_reference("Thảo luận cha").is_none());
        assert!(parse_reference("Tham chiếu courses").is_none());
    }

    #[test]
    fn test_field_cells_order() {
        let users = table("users").unwrap();
        let username = users.field("username").unwrap();
        assert_eq!(
            username.cells(),
            ["username", "varchar(50)", "UNIQUE", "Tên đăng nhập"]
        );
    }

    #[test]
    fn test_every_table_starts_with_primary_id() {
        for t in SCHEMA {
            let first = t.fields.first().expect("table has fields");
            assert_eq!(first.name, "id", "table {}", t.name);
            assert!(first.key.is_primary(), "table {}", t.name);
        }
    }
}
