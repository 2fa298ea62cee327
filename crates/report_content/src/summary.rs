//! One-line descriptions of every table, for the schema overview document.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub index: u32,
    pub name: &'static str,
    pub description: &'static str,
}

impl SummaryRow {
    /// Row cells in column order: index, table name, description.
    pub fn cells(&self) -> [String; 3] {
        [
            self.index.to_string(),
            self.name.to_string(),
            self.description.to_string(),
        ]
    }
}

const fn row(index: u32, name: &'static str, description: &'static str) -> SummaryRow {
    SummaryRow {
        index,
        name,
        description,
    }
}

pub static SUMMARY: &[SummaryRow] = &[
    row(1, "academic_class_courses", "Liên kết các lớp học với các khóa học cụ thể, cho phép một lớp học có thể học nhiều khóa học khác nhau."),
    row(2, "academic_class_instructors", "Liên kết các lớp học với các giảng viên phụ trách, hỗ trợ quản lý giảng viên cho từng lớp."),
    row(3, "academic_classes", "Lưu thông tin về các lớp học học thuật: mã lớp, tên lớp, năm học, trạng thái hoạt động."),
    row(4, "assignment_submissions", "Lưu trữ bài nộp của học viên cho từng bài tập, bao gồm nội dung, file đính kèm, trạng thái chấm điểm."),
    row(5, "assignments", "Quản lý các bài tập của khóa học hoặc lớp học, gồm tiêu đề, mô tả, hạn nộp, điểm tối đa, loại bài tập."),
    row(6, "categories", "Danh mục các lĩnh vực/nhóm khóa học, giúp phân loại và tổ chức các khóa học theo chủ đề."),
    row(7, "certificates", "Lưu thông tin chứng chỉ hoàn thành khóa học của học viên, gồm số chứng chỉ, ngày cấp, trạng thái."),
    row(8, "chatbot_response", "Lưu các câu hỏi và phản hồi tự động của chatbot hỗ trợ học viên hoặc người dùng."),
    row(9, "class_schedules", "Quản lý lịch học của từng lớp: thời gian, địa điểm, hình thức học, giảng viên, trạng thái lịch học."),
    row(10, "course_lesson_discussions", "Lưu các thảo luận, bình luận của học viên về từng bài học, hỗ trợ hỏi đáp và trao đổi kiến thức."),
    row(11, "course_lessons", "Quản lý các bài học trong từng phần của khóa học, gồm tiêu đề, nội dung, video, thứ tự, trạng thái."),
    row(12, "course_progress", "Theo dõi tiến độ học tập của học viên trong từng khóa học, từng bài học, trạng thái hoàn thành."),
    row(13, "course_sections", "Chia nhỏ khóa học thành các phần (section), giúp tổ chức nội dung học tập hợp lý và dễ theo dõi."),
    row(14, "courses", "Lưu thông tin chi tiết về các khóa học: tiêu đề, mô tả, giảng viên, giá, trình độ, trạng thái, ảnh."),
    row(15, "documents", "Quản lý tài liệu đính kèm cho từng khóa học: tiêu đề, loại file, đường dẫn, kích thước file."),
    row(16, "enrollments", "Lưu thông tin đăng ký khóa học của học viên, trạng thái đăng ký, ngày đăng ký, ngày hoàn thành."),
    row(17, "forum_likes", "Lưu lượt thích (like) của người dùng cho các chủ đề/thảo luận trên diễn đàn."),
    row(18, "forum_replies", "Lưu các phản hồi, trả lời trong các chủ đề diễn đàn, hỗ trợ phân cấp trả lời (parent_id)."),
    row(19, "forums", "Quản lý các chủ đề thảo luận của từng khóa học, gồm tiêu đề, mô tả, trạng thái, người tạo."),
    row(20, "instructor_availability", "Lưu lịch rảnh của giảng viên để sắp xếp lịch học, lịch dạy phù hợp với từng giảng viên."),
    row(21, "messages", "Lưu tin nhắn giữa các người dùng trong hệ thống (học viên, giảng viên, admin)."),
    row(22, "notifications", "Quản lý các thông báo gửi đến người dùng: tiêu đề, nội dung, loại thông báo, trạng thái đã đọc."),
    row(23, "payments", "Lưu thông tin thanh toán khóa học: số tiền, phương thức, trạng thái, mã giao dịch, ngày thanh toán."),
    row(24, "quiz_attempts", "Lưu thông tin mỗi lần học viên làm bài kiểm tra: thời gian bắt đầu, kết thúc, điểm số, trạng thái."),
    row(25, "quiz_options", "Lưu các lựa chọn đáp án cho từng câu hỏi kiểm tra, xác định đáp án đúng/sai."),
    row(26, "quiz_questions", "Quản lý các câu hỏi trong bài kiểm tra: nội dung, loại câu hỏi, điểm số, giải thích đáp án."),
    row(27, "quiz_responses", "Lưu câu trả lời của học viên cho từng câu hỏi trong mỗi lần làm bài kiểm tra."),
    row(28, "quizzes", "Quản lý các bài kiểm tra của khóa học/lớp học: tiêu đề, mô tả, thời gian, điểm đạt, trạng thái."),
    row(29, "reviews", "Lưu đánh giá của học viên về khóa học hoặc giảng viên: số sao, nội dung đánh giá, loại đánh giá."),
    row(30, "user_admins", "Lưu thông tin chi tiết về các quản trị viên: phòng ban, chức vụ, quyền hạn, liên hệ khẩn cấp."),
    row(31, "user_grades", "Lưu điểm số của học viên cho từng bài tập, bài kiểm tra, loại điểm, nhận xét, người chấm điểm."),
    row(32, "user_instructors", "Lưu thông tin chi tiết về giảng viên: chuyên môn, học vấn, kinh nghiệm, trạng thái xác minh."),
    row(33, "user_students", "Lưu thông tin chi tiết về học viên: ngày sinh, giới tính, học vấn, mục tiêu học tập, thành tích."),
    row(34, "user_students_academic", "Liên kết học viên với lớp học học thuật, mã sinh viên, năm học, trạng thái học tập."),
    row(35, "users", "Lưu thông tin tài khoản người dùng: tên đăng nhập, email, mật khẩu, vai trò, trạng thái, avatar."),
];
