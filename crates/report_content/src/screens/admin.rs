//! Administrator (quản trị viên) screenshots.

use super::RoleTables;
use crate::ordering::{hide, show};

pub(super) static TABLES: RoleTables = RoleTables {
    renames: RENAMES,
    descriptions: DESCRIPTIONS,
    english: ENGLISH,
    ordering: &[
        show("Đăng nhập quản trị viên.png"),
        show("Quản lý khóa học.png"),
        show("Quản lý khóa học (hộp thoại).png"),
        show("Quản lý khóa học (xem nội dung khóa học).png"),
        show("Quản lý giảng viên.png"),
        show("Quản lý giảng viên (hộp thoại).png"),
        show("Quản lý giảng viên (truy cập trang giảng viên).png"),
        show("Quản lý học viên.png"),
        show("Quản lý học viên (xem thông tin).png"),
        hide("Quản lý học viên 2.png"),
        show("Quản lý lớp học thuật.png"),
        show("Quản lý lớp học thuật (hộp thoại).png"),
        show("Quản lý lớp học thuật (thêm sinh viên).png"),
        hide("Quản lý lớp học thuật (xem danh sách).png"),
        show("Quản lý lớp học thuật (phân công).png"),
        show("Hộp thoại chat.png"),
        show("Danh mục.png"),
        show("Danh mục (hộp thoại).png"),
        show("Quản lý thanh toán.png"),
        hide("Quản lý thanh toán (xem thông tin).png"),
        show("Quản lý thống kê.png"),
        show("Quản lý đánh giá.png"),
        hide("Quản lý tài khoản cá nhân.png"),
    ],
};

/// Slug file name -> labelled file name.
const RENAMES: &[(&str, &str)] = &[
    ("quanlytaikhoancanhan.png", "Quản lý tài khoản cá nhân.png"),
    ("quanlydanhgia.png", "Quản lý đánh giá.png"),
    ("quanlythongke.png", "Quản lý thống kê.png"),
    ("quanlythanhtoan(xemthongtin).png", "Quản lý thanh toán (xem thông tin).png"),
    ("quanlythanhtoan.png", "Quản lý thanh toán.png"),
    ("danhmucdialog.png", "Danh mục (hộp thoại).png"),
    ("danhmuc.png", "Danh mục.png"),
    ("chatbox.png", "Hộp thoại chat.png"),
    ("quanlylophocthuat(themsinhvien).png", "Quản lý lớp học thuật (thêm sinh viên).png"),
    ("quanlylophocthuat(xemdanhsach).png", "Quản lý lớp học thuật (xem danh sách).png"),
    ("quanlylophocthuat(phancong).png", "Quản lý lớp học thuật (phân công).png"),
    ("quanlylophocthuatdialog.png", "Quản lý lớp học thuật (hộp thoại).png"),
    ("quanlylophocthuat.png", "Quản lý lớp học thuật.png"),
    ("quanlyhocvien2.png", "Quản lý học viên 2.png"),
    ("quanlyhocvien(xemthongtin).png", "Quản lý học viên (xem thông tin).png"),
    ("quanlyhocvien.png", "Quản lý học viên.png"),
    ("quanlygiangvien(truycaptranggiangvien).png", "Quản lý giảng viên (truy cập trang giảng viên).png"),
    ("quanlygiangviendialog.png", "Quản lý giảng viên (hộp thoại).png"),
    ("quanlygiangvien.png", "Quản lý giảng viên.png"),
    ("quanlykhoahoc(xembnoidungkhoahoc).png", "Quản lý khóa học (xem nội dung khóa học).png"),
    ("quanlykhoahocdialog.png", "Quản lý khóa học (hộp thoại).png"),
    ("quanlykhoahoc.png", "Quản lý khóa học.png"),
    ("dangnhap.png", "Đăng nhập quản trị viên.png"),
];

const DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Quản lý đánh giá.png",
        "Màn hình cho phép quản trị viên xem, tổng hợp, phân tích và phản hồi các đánh giá từ học viên về chất lượng đào tạo, giảng viên, khóa học, tài liệu. Quản trị viên có thể lọc, xuất báo cáo đánh giá, phát hiện các vấn đề nổi bật và đề xuất cải tiến chất lượng đào tạo.",
    ),
    (
        "Quản lý thống kê.png",
        "Màn hình này cung cấp các báo cáo, thống kê tổng hợp về hoạt động học tập, giảng dạy và vận hành hệ thống. Người dùng có thể xem thống kê số lượng học viên, giảng viên, khóa học, bài tập, trắc nghiệm, tỷ lệ hoàn thành khóa học, điểm trung bình, số lượng chứng chỉ đã cấp, doanh thu từ học phí, v.v. Ngoài ra, chức năng còn hỗ trợ lọc, xuất báo cáo theo từng khoảng thời gian, lớp học, khóa học hoặc giảng viên. Thông tin thống kê giúp nhà quản lý đưa ra quyết định kịp thời, tối ưu hóa hoạt động đào tạo và nâng cao chất lượng dịch vụ.",
    ),
    (
        "Quản lý thanh toán.png",
        "Màn hình tổng quan về quản lý thanh toán học phí, cho phép quản trị viên theo dõi doanh thu, các khoản thu/chi, xuất báo cáo tài chính, kiểm soát các khoản phí phát sinh và đảm bảo minh bạch tài chính trong hệ thống.",
    ),
    (
        "Danh mục (hộp thoại).png",
        "Màn hình hộp thoại cho phép quản trị viên tạo mới, chỉnh sửa, xóa các danh mục khóa học, phân loại chuyên ngành, thiết lập tiêu chí phân loại, đảm bảo hệ thống danh mục luôn cập nhật, khoa học.",
    ),
    (
        "Danh mục.png",
        "Màn hình tổng quan về quản lý danh mục khóa học, cho phép xem, tìm kiếm, lọc, chỉnh sửa, xuất báo cáo danh mục, hỗ trợ tổ chức hệ thống khóa học hợp lý.",
    ),
    (
        "Hộp thoại chat.png",
        "Màn hình chat cho phép quản trị viên trao đổi trực tiếp với người dùng (học viên, giảng viên), hỗ trợ giải đáp thắc mắc, xử lý sự cố, gửi thông báo khẩn cấp và lưu trữ lịch sử trò chuyện.",
    ),
    (
        "Quản lý lớp học thuật (thêm sinh viên).png",
        "Màn hình cho phép quản trị viên thêm sinh viên vào lớp học thuật, tìm kiếm, lọc, phân nhóm sinh viên, gửi thông báo mời tham gia lớp.",
    ),
    (
        "Quản lý lớp học thuật (phân công).png",
        "Màn hình cho phép quản trị viên phân công giảng viên cho từng lớp học thuật, thiết lập lịch dạy, gửi thông báo phân công.",
    ),
    (
        "Quản lý lớp học thuật (hộp thoại).png",
        "Màn hình hộp thoại cho phép quản trị viên quản lý thông tin chi tiết của lớp học, chỉnh sửa tên lớp, mô tả, lịch học, danh sách sinh viên, giảng viên.",
    ),
    (
        "Quản lý lớp học thuật.png",
        "Màn hình tổng quan về quản lý lớp học thuật, cho phép quản trị viên xem, tìm kiếm, lọc, xuất báo cáo danh sách lớp, tiến độ học tập, gửi thông báo cho lớp.",
    ),
    (
        "Quản lý học viên (xem thông tin).png",
        "Màn hình cho phép quản trị viên xem chi tiết thông tin học viên, lịch sử học tập, điểm số, trạng thái học phí, cảnh báo học vụ.",
    ),
    (
        "Quản lý học viên.png",
        "Đây là màn hình tổng quan cho phép quản trị viên hoặc giảng viên quản lý toàn bộ danh sách học viên trong hệ thống. Người dùng có thể tìm kiếm, lọc, thêm mới, chỉnh sửa hoặc xóa học viên, cũng như truy cập vào chi tiết từng học viên để theo dõi tiến độ học tập, điểm số và các thông tin liên quan. Chức năng này giúp việc quản lý học viên trở nên dễ dàng, hiệu quả và chính xác.",
    ),
    (
        "Quản lý giảng viên (truy cập trang giảng viên).png",
        "Màn hình cho phép quản trị viên truy cập trang thông tin chi tiết của giảng viên, xem lịch sử giảng dạy, đánh giá, phân công lớp học.",
    ),
    (
        "Quản lý giảng viên (hộp thoại).png",
        "Màn hình hộp thoại cho phép quản trị viên quản lý thông tin giảng viên, chỉnh sửa hồ sơ, phân công lớp học, gửi thông báo.",
    ),
    (
        "Quản lý giảng viên.png",
        "Màn hình tổng quan về quản lý giảng viên, cho phép xem, tìm kiếm, lọc, xuất báo cáo danh sách giảng viên, phân công giảng dạy.",
    ),
    (
        "Quản lý khóa học (xem nội dung khóa học).png",
        "Màn hình cho phép quản trị viên xem chi tiết nội dung của từng khóa học, bao gồm bài học, bài tập, trắc nghiệm, tài liệu, giảng viên phụ trách.",
    ),
    (
        "Quản lý khóa học (hộp thoại).png",
        "Màn hình hộp thoại cho phép quản trị viên quản lý thông tin chi tiết của khóa học, chỉnh sửa tên, mô tả, lịch học, giảng viên phụ trách.",
    ),
    (
        "Quản lý khóa học.png",
        "Đây là màn hình trung tâm cho phép quản trị viên hoặc giảng viên quản lý toàn bộ các khóa học trên hệ thống. Người dùng có thể xem danh sách các khóa học hiện có, tìm kiếm, lọc theo chuyên ngành, trạng thái hoặc giảng viên phụ trách. Ngoài ra, chức năng này còn hỗ trợ thêm mới khóa học, chỉnh sửa thông tin chi tiết (tên, mô tả, học phí, thời lượng, giảng viên phụ trách), xóa hoặc tạm ngưng khóa học. Người dùng cũng có thể truy cập vào từng khóa học để quản lý nội dung bài học, tài liệu, bài tập, trắc nghiệm, cũng như theo dõi số lượng học viên đăng ký và tiến độ học tập của từng lớp. Chức năng này giúp đảm bảo việc tổ chức, vận hành và cập nhật các khóa học được thực hiện hiệu quả, đáp ứng nhu cầu đào tạo đa dạng.",
    ),
    (
        "Đăng nhập quản trị viên.png",
        "Màn hình đăng nhập dành riêng cho quản trị viên hệ thống. Tại đây, quản trị viên nhập tên đăng nhập và mật khẩu để truy cập các chức năng quản lý, cấu hình hệ thống, kiểm soát người dùng, khóa học, tài chính và các nghiệp vụ quan trọng khác. Chức năng này đảm bảo an toàn, bảo mật và phân quyền truy cập rõ ràng giữa các vai trò trong hệ thống.",
    ),
];

/// Labelled stem -> README caption.
const ENGLISH: &[(&str, &str)] = &[
    ("Quản lý thống kê", "Statistics Management"),
    ("Quản lý khóa học (xem nội dung khóa học)", "Course Management (View Course Content)"),
    ("Đăng nhập quản trị viên", "Admin Login"),
    ("Quản lý thanh toán", "Payment Management"),
    ("Quản lý thanh toán (xem thông tin)", "Payment Management (View Information)"),
    ("Quản lý tài khoản cá nhân", "Personal Account Management"),
    ("Quản lý lớp học thuật", "Academic Class Management"),
    ("Quản lý lớp học thuật (hộp thoại)", "Academic Class Management (Dialog)"),
    ("Quản lý lớp học thuật (xem danh sách)", "Academic Class Management (View List)"),
    ("Quản lý lớp học thuật (thêm sinh viên)", "Academic Class Management (Add Student)"),
    ("Quản lý lớp học thuật (phân công)", "Academic Class Management (Assignment)"),
    ("Quản lý khóa học", "Course Management"),
    ("Quản lý khóa học (hộp thoại)", "Course Management (Dialog)"),
    ("Quản lý học viên và sinh viên", "Student Management"),
    ("Quản lý học viên và sinh viên (xem thông tin)", "Student Management (View Information)"),
    ("Quản lý giảng viên", "Lecturer Management"),
    ("Quản lý giảng viên (hộp thoại)", "Lecturer Management (Dialog)"),
    ("Quản lý giảng viên (truy cập trang giảng viên)", "Lecturer Management (Access Lecturer Page)"),
    ("Quản lý đánh giá", "Evaluation Management"),
    ("Danh mục", "Categories"),
    ("Danh mục (hộp thoại)", "Categories (Dialog)"),
    ("Hộp thoại chat", "Chat Dialog"),
];
